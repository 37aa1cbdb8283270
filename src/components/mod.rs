pub mod add_task_form;
pub mod board;
pub mod column;
pub mod task_card;

pub use add_task_form::AddTaskForm;
pub use board::KanbanBoard;
pub use column::BoardColumn;
pub use task_card::TaskCard;
