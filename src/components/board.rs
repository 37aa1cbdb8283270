use leptos::prelude::*;

use crate::components::BoardColumn;
use crate::models::{Board, DragResult};

#[component]
pub fn KanbanBoard(
    #[prop(into)] board: ReadSignal<Board>,
    on_drag_end: Callback<DragResult>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="kanban-board">
            // Re-renders the column set whenever the board signal changes.
            {move || {
                board
                    .get()
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <BoardColumn
                                column=column
                                on_drag_end=on_drag_end
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
