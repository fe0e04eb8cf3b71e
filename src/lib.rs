//! Trợ lý Soạn thảo NĐ30: review pipeline for Vietnamese administrative
//! documents under Decree 30/2020/NĐ-CP.
//!
//! The crate turns an uploaded document into a transport payload, sends it to
//! the remote correction model, validates the structured result, and projects
//! that single result into three consistent outputs: a Decree 30 letterhead
//! DOCX, a plain-text review report, and a preview tree for on-screen display.
//! The surrounding UI shell (file picker, download anchor, clipboard) lives
//! outside this crate and drives [`session::ReviewSession`].

pub mod document;
pub mod ingest;
pub mod oracle;
pub mod render;
pub mod session;

pub use crate::document::{Correction, Review, StructuredDocument, UploadedFile};
pub use crate::oracle::{ApiKey, CorrectionOracle, GeminiClient, OracleError};
pub use crate::render::{build_docx, build_preview, build_report, EXPORT_FILENAME};
pub use crate::session::{ReviewSession, SessionError};
