//! Top-level submission flow.
//!
//! One review lives in memory at a time. A new submission discards the
//! previous result before anything else runs, and every failure along the way
//! leaves the session with no result, so the caller shows either a full review
//! or a single error message, never both.

use std::path::Path;

use thiserror::Error;

use crate::document::Review;
use crate::ingest::{self, IngestError};
use crate::oracle::{CorrectionOracle, OracleError};
use crate::render::{self, RenderError};

/// One human-readable message per failure class; the messages live on the
/// wrapped errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Chưa có kết quả để xuất.")]
    NoResult,
}

/// Holds the at-most-one current review and drives submissions through the
/// oracle seam. The UI shell keeps resubmission disabled while `submit` is
/// pending, so a session never has two calls in flight.
pub struct ReviewSession<O> {
    oracle: O,
    current: Option<Review>,
}

impl<O: CorrectionOracle> ReviewSession<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            current: None,
        }
    }

    /// Ingest the file at `path`, send it for review, and store the result.
    /// On error the session holds no result.
    pub async fn submit(&mut self, path: &Path) -> Result<&Review, SessionError> {
        self.current = None;
        let payload = ingest::prepare_upload(path)?;
        self.run(payload).await
    }

    /// Submission variant for callers that already hold the file contents.
    pub async fn submit_bytes(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> Result<&Review, SessionError> {
        self.current = None;
        let payload = ingest::prepare_upload_from_bytes(name, bytes)?;
        self.run(payload).await
    }

    async fn run(
        &mut self,
        payload: crate::document::UploadedFile,
    ) -> Result<&Review, SessionError> {
        log::info!("bắt đầu rà soát '{}'", payload.name);
        let review = self.oracle.review(&payload).await?;
        log::info!(
            "rà soát xong '{}': {} lỗi đã sửa",
            payload.name,
            review.corrections.len()
        );
        Ok(self.current.insert(review))
    }

    /// The displayed result, if any.
    pub fn current(&self) -> Option<&Review> {
        self.current.as_ref()
    }

    /// Discard the current result, as when the user selects a new file.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Export the current review as the Decree 30 DOCX, to be offered for
    /// download under [`render::EXPORT_FILENAME`].
    pub fn export_docx(&self) -> Result<Vec<u8>, SessionError> {
        let review = self.current.as_ref().ok_or(SessionError::NoResult)?;
        Ok(render::build_docx(&review.structured_document)?)
    }

    /// The plain-text report of the current review, for the UI shell's
    /// clipboard action.
    pub fn report(&self) -> Result<String, SessionError> {
        let review = self.current.as_ref().ok_or(SessionError::NoResult)?;
        Ok(render::build_report(&review.summary, &review.corrections))
    }

    /// The preview tree of the current review.
    pub fn preview(&self) -> Result<Vec<render::PreviewNode>, SessionError> {
        let review = self.current.as_ref().ok_or(SessionError::NoResult)?;
        Ok(render::build_preview(&review.structured_document))
    }
}
