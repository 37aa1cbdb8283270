use leptos::prelude::*;

use crate::models::{Board, DragResult};

// Bundles the board signal with the operations the page hands down to
// components. Every operation goes through Board's pure methods: Some means
// new state to publish, None means nothing changed and nothing re-renders.
pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub on_drag_end: Callback<DragResult>,
    pub add_task: Callback<(String, String), bool>,
    pub delete_task: Callback<(String, String)>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(Board::seed());

    let on_drag_end = Callback::new(move |result: DragResult| {
        let Some(destination) = result.destination.clone() else {
            web_sys::console::log_1(&"Drag released outside the board".into());
            return;
        };

        match board.get_untracked().move_task(&result) {
            Some(next) => {
                web_sys::console::log_1(
                    &format!(
                        "Moved task from {}[{}] to {}[{}]",
                        result.source.column_id,
                        result.source.index,
                        destination.column_id,
                        destination.index
                    )
                    .into(),
                );
                board.set(next);
            }
            None if result.source == destination => {
                // Picked up and put straight back down.
                web_sys::console::log_1(&"Drag ended on its original slot".into());
            }
            None => {
                web_sys::console::warn_1(
                    &format!(
                        "Ignored drop from {}[{}] to {}[{}]",
                        result.source.column_id,
                        result.source.index,
                        destination.column_id,
                        destination.index
                    )
                    .into(),
                );
            }
        }
    });

    // Returns whether the task was actually added so the form knows when to
    // clear its input.
    let add_task = Callback::new(move |(column_id, content): (String, String)| {
        match board.get_untracked().add_task(&column_id, &content) {
            Some(next) => {
                web_sys::console::log_1(&format!("Added task to column {}", column_id).into());
                board.set(next);
                true
            }
            None if content.trim().is_empty() => {
                web_sys::console::log_1(&"Ignored empty task submission".into());
                false
            }
            None => {
                web_sys::console::warn_1(
                    &format!("Cannot add task to unknown column {}", column_id).into(),
                );
                false
            }
        }
    });

    let delete_task = Callback::new(move |(column_id, task_id): (String, String)| {
        match board.get_untracked().delete_task(&column_id, &task_id) {
            Some(next) => {
                web_sys::console::log_1(
                    &format!("Deleted task {} from column {}", task_id, column_id).into(),
                );
                board.set(next);
            }
            None => {
                web_sys::console::warn_1(
                    &format!("Delete ignored, task {} not in column {}", task_id, column_id)
                        .into(),
                );
            }
        }
    });

    BoardHook {
        board: board.read_only(),
        on_drag_end,
        add_task,
        delete_task,
    }
}
