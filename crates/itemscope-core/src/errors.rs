use thiserror::Error;

/// Core error types.
///
/// Unknown types, rejected properties, and rejected values are not errors;
/// they only show up as omissions in the validated item.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Item scopes were nested deeper than the configured limit.
    #[error("item scope nesting depth {depth} exceeds limit {max_depth}")]
    RecursionLimitExceeded {
        /// Depth of the scope that crossed the limit (top-level scope is 1).
        depth: usize,
        /// Configured maximum depth.
        max_depth: usize,
    },
    /// Input did not have the raw item scope shape.
    #[error("malformed item scope at {path}: {reason}")]
    MalformedInput {
        /// Dotted path to the offending element.
        path: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Canonical rendering failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] itemscope_canonical::CanonicalizationError),
}
