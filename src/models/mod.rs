pub mod board;
pub mod column;
pub mod drag;
pub mod task;

// Export the board types for use throughout the app
pub use board::Board;
pub use column::Column;
pub use drag::{DragLocation, DragResult};
pub use task::Task;
