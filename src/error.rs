//! Errors returned by the strict list operations.

/// Errors that can occur when modifying a [`List`](crate::list::List) strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The requested position is past the end of the list.
    #[error("position {position} is out of bounds for a list of length {len}")]
    PositionOutOfBounds {
        /// The position that was asked for.
        position: usize,
        /// The length of the list at the time.
        len: usize,
    },
}
