//! Shared error types

use thiserror::Error;

/// An operation was handed fewer facilities than it needs.
///
/// Multi-facility comparisons have a hard minimum selection size; callers
/// surface this to the user instead of rendering an empty comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("at least {required} facilities required, got {actual}")]
pub struct InsufficientInputError {
    /// Minimum number of facilities the operation needs
    pub required: usize,
    /// Number of facilities actually supplied
    pub actual: usize,
}
