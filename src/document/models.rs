//! Data model for one reviewed document.
//!
//! Field names follow the JSON schema declared to the correction model, so
//! every struct (de)serializes with camelCase keys.

use serde::{Deserialize, Serialize};

/// Letterhead fields. `national_name` and `motto` are required by the response
/// schema; the renderer still substitutes the Decree 30 literals when they
/// come back blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Issuing agency, upper-cased, may contain line breaks.
    #[serde(default)]
    pub agency_name: Option<String>,
    /// Document number, e.g. "Số: 12/UBND-VP".
    #[serde(default)]
    pub agency_number: Option<String>,
    pub national_name: String,
    pub motto: String,
    /// Place and date line, e.g. "Lào Cai, ngày 10 tháng 01 năm 2024".
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Document type and subject, upper-cased, may contain line breaks.
    pub title: String,
    /// Content paragraphs in source order, one justified block each.
    pub paragraphs: Vec<String>,
}

/// Recipients block and signature block.
///
/// `recipients` being absent (or empty) suppresses the whole "Nơi nhận:"
/// block in every projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub recipients: Option<Vec<String>>,
    #[serde(default)]
    pub signer_title: String,
    #[serde(default)]
    pub signer_name: String,
}

/// The single source of truth for a corrected document. Produced only by
/// [`super::schema::decode_review`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocument {
    pub header: Header,
    pub body: Body,
    pub footer: Footer,
}

/// One entry of the correction ledger. The ledger is a log, not a set:
/// duplicates are legal and the 1-based display index is the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// Free-form label of where the fix applies.
    pub section: String,
    pub original_text: String,
    pub corrected_text: String,
    pub reason: String,
}

/// Atomic result of one correction-model call. Created whole, discarded whole
/// when the next submission starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Plain-text rendition for quick display.
    pub formatted_document: String,
    /// Structured rendition that drives the DOCX export and the preview.
    pub structured_document: StructuredDocument,
    #[serde(default)]
    pub corrections: Vec<Correction>,
    #[serde(default)]
    pub summary: String,
}

/// Transport envelope between ingestion and the correction model. Opaque to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub base64: String,
}
