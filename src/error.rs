//! Error type shared by building and querying.

use thiserror::Error;

/// Errors reported by [`PointBspTree`](crate::PointBspTree) operations.
///
/// Every variant is a precondition violation detected at the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BspError {
    /// The tree holds zero points, so there is nothing to answer with.
    #[error("query issued against an empty tree")]
    EmptyQuery,

    /// A parameter is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
