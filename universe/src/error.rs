//! Error type shared by every fallible core operation

use thiserror::Error;

/// Failures reported synchronously by [`Body`](crate::Body) and
/// [`Universe`](crate::Universe). A refused operation never mutates state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UniverseError {
    /// Non-positive mass, non-finite vector component, empty identifier or
    /// an unusable configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No body is registered under the requested identifier.
    #[error("no body registered under id `{0}`")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, UniverseError>;
