use crate::element::ElementId;

/// Errors raised by the sortable list controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortableError {
    /// Handles are required but the item has no `.drag-handle` child.
    MissingHandle(ElementId),
    /// The `drag-handles` value is not one of `false`, `true` or `create`.
    UnknownDragHandles(String),
    /// The `drop-effect` value is not a recognized effect.
    UnknownDropEffect(String),
}

impl std::fmt::Display for SortableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortableError::MissingHandle(item) => {
                write!(f, "Item {} has no drag handle", item)
            }
            SortableError::UnknownDragHandles(value) => {
                write!(f, "Unknown drag-handles value {:?}", value)
            }
            SortableError::UnknownDropEffect(value) => {
                write!(f, "Unknown drop effect {:?}", value)
            }
        }
    }
}

impl std::error::Error for SortableError {}

/// Result type for sortable list operations.
pub type SortableResult<T> = Result<T, SortableError>;
