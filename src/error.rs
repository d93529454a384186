//! Errors for the few fallible edges of the crate. Tree and sort operations
//! themselves never fail.

/// Errors returned when parsing algorithm names or building generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name doesn't match any of the sorting algorithms.
    #[error("unknown sorting algorithm: {0:?}")]
    UnknownAlgorithm(String),
    /// A generator was configured with a lower bound above its upper bound.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
