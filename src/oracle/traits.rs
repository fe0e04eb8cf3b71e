//! Trait seam between the submission flow and the remote model.

use async_trait::async_trait;

use crate::document::{Review, UploadedFile};

use super::OracleError;

/// A possibly-fallible function from (file payload, fixed prompt) to a
/// structured review. The production implementation is
/// [`super::GeminiClient`]; tests substitute a stub.
#[async_trait]
pub trait CorrectionOracle {
    async fn review(&self, file: &UploadedFile) -> Result<Review, OracleError>;
}
