//! Correction oracle: the remote model that reviews a document and returns
//! the structured result.
//!
//! The call is a single-shot request/response. No retry, no streaming, no
//! local timeout beyond what the transport enforces.

pub mod client;
pub mod prompt;
pub mod traits;

pub use client::{ApiKey, GeminiClient};
pub use traits::CorrectionOracle;

use thiserror::Error;

use crate::document::SchemaError;

#[derive(Debug, Error)]
pub enum OracleError {
    /// No API credential configured. Raised before any network I/O.
    #[error("API key không được định nghĩa.")]
    MissingCredential,
    /// Transport failure or a malformed model reply, carrying the underlying
    /// message.
    #[error("Đã xảy ra lỗi khi giao tiếp với AI: {0}")]
    Communication(String),
    /// The reply decoded but failed payload validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
