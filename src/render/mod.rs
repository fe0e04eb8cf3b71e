//! Layout renderer: three pure projections of one [`StructuredDocument`],
//! the Decree 30 DOCX export, the plain-text review report, and the preview
//! tree. All three consume the same default table and the same
//! recipients-presence rule, so they can never drift apart.

pub mod docx;
pub mod preview;
pub mod report;

pub use docx::build_docx;
pub use preview::{build_preview, PreviewNode, TextAlign, TextStyle};
pub use report::build_report;

use thiserror::Error;

use crate::document::Footer;

/// Fixed download name of the export artifact.
pub const EXPORT_FILENAME: &str = "Van_ban_chuan_nghi_dinh_30.docx";

/// Serif face mandated by the Decree 30 template.
pub(crate) const FONT: &str = "Times New Roman";

// Run sizes in half-points, shared by the export and the preview.
pub(crate) const SIZE_NORMAL: usize = 28; // 14pt
pub(crate) const SIZE_SMALL: usize = 26; // 13pt
pub(crate) const SIZE_LABEL: usize = 24; // 12pt
pub(crate) const SIZE_RECIPIENT: usize = 22; // 11pt
pub(crate) const SIZE_RULE: usize = 10; // 5pt decorative rule

/// Decorative rule under the motto.
pub(crate) const HEADER_RULE: &str = "________________________";

/// Label above the recipients list.
pub(crate) const RECIPIENTS_LABEL: &str = "Nơi nhận:";

#[derive(Debug, Error)]
pub enum RenderError {
    /// The export is atomic: on any construction failure no bytes exist.
    #[error("Không thể tạo file tải xuống. Vui lòng thử lại.")]
    ExportFailed,
}

/// Decree 30 fallback literals. The single source every projection
/// substitutes from when a field is absent or blank.
pub mod defaults {
    pub const AGENCY_NAME: &str = "TÊN CƠ QUAN";
    pub const AGENCY_NUMBER: &str = "Số: ...";
    pub const NATIONAL_NAME: &str = "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM";
    pub const MOTTO: &str = "Độc lập - Tự do - Hạnh phúc";
    pub const DATE_LINE: &str = "..., ngày ... tháng ... năm ...";
    pub const SIGNER_TITLE: &str = "THỦ TRƯỞNG CƠ QUAN";

    /// Substitute the fallback when the value is absent or blank.
    pub fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => fallback,
        }
    }
}

/// Recipients to render, if any. An absent list and an explicitly empty list
/// both suppress the whole "Nơi nhận:" block.
pub(crate) fn recipients_block(footer: &Footer) -> Option<&[String]> {
    match footer.recipients.as_deref() {
        Some(list) if !list.is_empty() => Some(list),
        _ => None,
    }
}
