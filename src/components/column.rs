use leptos::prelude::*;

use crate::components::TaskCard;
use crate::dnd::use_drag_context;
use crate::models::{Column, DragLocation, DragResult};

#[component]
pub fn BoardColumn(
    column: Column,
    on_drag_end: Callback<DragResult>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let drag = use_drag_context();

    let task_count = column.tasks.len();
    // Hovering the open area below the cards targets the end of the list.
    let end_slot = DragLocation::new(column.id.clone(), task_count);
    let column_id_for_over = column.id.clone();

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{column.title.clone()}</h3>
                <span class="task-count">{task_count}</span>
            </div>
            <div
                class="column-content"
                class:dragging-over=move || drag.is_over_column(&column_id_for_over)
                on:dragover={
                    let end_slot = end_slot.clone();
                    move |e| {
                        // Cancelling dragover is what makes the list accept
                        // the drop at all.
                        e.prevent_default();
                        drag.drag_over(end_slot.clone());
                    }
                }
                on:drop=move |e| {
                    e.prevent_default();
                    if let Some(result) = drag.complete_drop() {
                        on_drag_end.run(result);
                    }
                }
            >
                {column
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(index, task)| {
                        view! {
                            <TaskCard
                                task=task.clone()
                                column_id=column.id.clone()
                                index=index
                                on_drag_end=on_drag_end
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
