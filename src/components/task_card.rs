use leptos::prelude::*;

use crate::dnd::use_drag_context;
use crate::models::{DragLocation, DragResult, Task};

// A draggable card. The card reports itself as the drag source on dragstart
// and as the hovered slot on dragover; the surrounding column handles the
// drop itself.
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] column_id: String,
    index: usize,
    on_drag_end: Callback<DragResult>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let drag = use_drag_context();

    // The slot this card occupies in the current render.
    let slot = DragLocation::new(column_id.clone(), index);
    let slot_for_class = slot.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || {
                drag.is_dragging_from(&slot_for_class.column_id, slot_for_class.index)
            }
            draggable="true"
            on:dragstart={
                let slot = slot.clone();
                let task_id = task.id.clone();
                move |e| {
                    // Firefox refuses to start a drag without a payload on
                    // the event.
                    if let Some(data) = e.data_transfer() {
                        data.set_effect_allowed("move");
                        let _ = data.set_data("text/plain", &task_id);
                    }
                    drag.begin(slot.clone());
                }
            }
            on:dragover={
                let slot = slot.clone();
                move |e| {
                    // Cancelling dragover marks the card as a drop target;
                    // stopping propagation keeps the column handler from
                    // retargeting the hover to the end of the list.
                    e.prevent_default();
                    e.stop_propagation();
                    drag.drag_over(slot.clone());
                }
            }
            on:dragend=move |_| {
                // Fires after every drag. A handled drop has already
                // consumed the gesture, so this only reports drags released
                // outside every column.
                if let Some(result) = drag.abandon() {
                    on_drag_end.run(result);
                }
            }
        >
            <div class="task-content">{task.content.clone()}</div>
            <button
                class="delete-btn"
                on:click={
                    let column_id = column_id.clone();
                    let task_id = task.id.clone();
                    move |e| {
                        e.stop_propagation();
                        on_delete.run((column_id.clone(), task_id.clone()));
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}
