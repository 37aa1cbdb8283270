use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn AddTaskForm(
    options: Vec<(String, String)>,
    add_task: Callback<(String, String), bool>,
) -> impl IntoView {
    // The select starts out on the first column.
    let first_column = options.first().map(|(id, _)| id.clone()).unwrap_or_default();

    let (content, set_content) = signal(String::new());
    let (target_column, set_target_column) = signal(first_column);

    // Covers both the button and Enter in the input. The input only clears
    // when the task was actually accepted.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let added = add_task.run((target_column.get_untracked(), content.get_untracked()));
        if added {
            set_content.set(String::new());
        }
    };

    view! {
        <form class="add-task-bar" on:submit=handle_submit>
            <input
                type="text"
                class="task-input"
                placeholder="Enter new task..."
                on:input=move |ev| set_content.set(event_target_value(&ev))
                prop:value=move || content.get()
            />
            <select
                class="column-select"
                on:change=move |ev| set_target_column.set(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(id, title)| {
                        view! { <option value=id.clone()>{title.clone()}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <button type="submit" class="btn-primary">"Add Task"</button>
        </form>
    }
}
