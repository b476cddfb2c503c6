//! Error types for the remote inventory client.

use thiserror::Error;

/// Failure raised by a remote inventory operation.
///
/// Callers collapse every variant into the same user-visible outcome; the
/// split exists so logs can say what actually went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// A request or response body could not be serialized or decoded.
    #[error("bad payload: {0}")]
    Decode(String),

    /// The health probe missed its deadline.
    #[error("health probe timed out")]
    Timeout,
}
