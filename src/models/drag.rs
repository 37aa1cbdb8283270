// A slot on the board: a column plus a position inside its task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

// Where a finished drag started and where it was released. A drag dropped
// outside every column has no destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}
