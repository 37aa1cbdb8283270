mod app;
mod components;
mod dnd;
mod hooks;
mod models;
mod pages;

use app::App;

fn main() {
    // Surfaces panics in the browser console instead of a silent hang.
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
