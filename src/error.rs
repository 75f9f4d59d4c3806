use thiserror::Error;

/// Error types for `DynamicList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynamicListError {
    /// Index is outside the logical range `[0, length)` of the list
    #[error("Index out of range: index {index} is beyond list length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the list
        length: usize,
    },
}
