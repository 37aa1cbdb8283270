use leptos::prelude::*;

use crate::components::{AddTaskForm, KanbanBoard};
use crate::dnd::provide_drag_context;
use crate::hooks::{use_board, BoardHook};

#[component]
pub fn Kanban() -> impl IntoView {
    let BoardHook {
        board,
        on_drag_end,
        add_task,
        delete_task,
    } = use_board();

    // One drag context for the whole page; cards and columns reach it
    // through use_drag_context.
    provide_drag_context();

    // The column set is fixed for the life of the page, so the select
    // options are captured once instead of tracked.
    let options = board.with_untracked(|b| {
        b.columns
            .iter()
            .map(|c| (c.id.clone(), c.title.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <h1>"Kanban Board"</h1>
            </header>
            <AddTaskForm options=options add_task=add_task />
            <KanbanBoard board=board on_drag_end=on_drag_end on_delete=delete_task />
        </div>
    }
}
