//! Errors returned by the product client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one expected.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connect, DNS, I/O).
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}
