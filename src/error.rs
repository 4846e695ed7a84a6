//! Errors reported by [`Tree`][crate::linked::Tree].

use thiserror::Error;

/// Failure of a tree operation whose contract requires its argument to be present.
///
/// Lookups that may legitimately miss (`find`, `successor`, `range_find`, ...) return `None`
/// instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `remove` was asked for an item the tree does not contain.
    #[error("item not in tree")]
    NotFound,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
