use serde::{Deserialize, Serialize};

use crate::models::{Column, DragResult, Task};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    // The fixed three-column layout every session starts from.
    pub fn seed() -> Self {
        Self {
            columns: vec![
                Column::new(
                    "todo",
                    "To Do",
                    vec![
                        Task::seeded("task-1", "Research project requirements"),
                        Task::seeded("task-2", "Create wireframes"),
                        Task::seeded("task-3", "Set up development environment"),
                    ],
                ),
                Column::new(
                    "in-progress",
                    "In Progress",
                    vec![
                        Task::seeded("task-4", "Build authentication system"),
                        Task::seeded("task-5", "Design database schema"),
                    ],
                ),
                Column::new(
                    "done",
                    "Done",
                    vec![
                        Task::seeded("task-6", "Project kickoff meeting"),
                        Task::seeded("task-7", "Choose tech stack"),
                    ],
                ),
            ],
        }
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    // Applies a finished drag and returns the next board state. Returns None
    // whenever the drag changes nothing: released outside the board, dropped
    // back on its own slot, aimed at a column that doesn't exist, or started
    // from an index that no longer does.
    pub fn move_task(&self, result: &DragResult) -> Option<Board> {
        let source = &result.source;
        let destination = result.destination.as_ref()?;

        if source.column_id == destination.column_id && source.index == destination.index {
            return None;
        }

        let source_col = self.column_index(&source.column_id)?;
        let dest_col = self.column_index(&destination.column_id)?;

        let mut next = self.clone();
        if source.index >= next.columns[source_col].tasks.len() {
            return None;
        }

        // Remove first, then insert into the already-shortened list. For a
        // same-column move this is what makes the destination index behave
        // like a splice.
        let moved = next.columns[source_col].tasks.remove(source.index);
        let dest_tasks = &mut next.columns[dest_col].tasks;
        let insert_at = destination.index.min(dest_tasks.len());
        dest_tasks.insert(insert_at, moved);

        Some(next)
    }

    // Appends a new task to the given column. Blank content and unknown
    // columns are no-ops; content is otherwise stored exactly as typed.
    pub fn add_task(&self, column_id: &str, content: &str) -> Option<Board> {
        if content.trim().is_empty() {
            return None;
        }
        let col = self.column_index(column_id)?;

        let mut next = self.clone();
        next.columns[col].tasks.push(Task::new(content.to_string()));
        Some(next)
    }

    // Removes the task with the given id from the given column, if it is
    // actually there.
    pub fn delete_task(&self, column_id: &str, task_id: &str) -> Option<Board> {
        let col = self.column_index(column_id)?;
        if !self.columns[col].tasks.iter().any(|t| t.id == task_id) {
            return None;
        }

        let mut next = self.clone();
        next.columns[col].tasks.retain(|t| t.id != task_id);
        Some(next)
    }
}
