//! Error types for deskex-api.
//!
//! Transient failures are handled inside the attempt loop and never escape;
//! callers only ever see [`ApiError::RetriesExhausted`], which carries the
//! last attempt's failure as its source.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("response body is not valid JSON")]
    InvalidJson,

    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error("retries exhausted ({attempts} attempts)")]
    RetriesExhausted {
        attempts: u32,
        source: Option<Box<ApiError>>,
    },
}
