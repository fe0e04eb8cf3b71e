//! Document ingestion: turn a selected file into the transport payload sent
//! to the correction model.
//!
//! Modern Word files have their raw text extracted and travel as plain text;
//! the legacy binary format is refused on the extension alone. Everything
//! else (PDF, TXT, ...) passes through base64-encoded with its guessed mime
//! type.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::document::UploadedFile;

const FALLBACK_NAME: &str = "tai-lieu";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Vui lòng chuyển đổi file .doc sang .docx trước khi tải lên.")]
    LegacyDoc,
    #[error("Không thể đọc nội dung file Word (.docx).")]
    DocxUnreadable,
    #[error("Không thể đọc tệp đã chọn: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// Package the file at `path` as an [`UploadedFile`].
///
/// The legacy `.doc` check runs before the file is opened, so a rejected
/// upload never touches the filesystem.
pub fn prepare_upload(path: &Path) -> Result<UploadedFile, IngestError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(FALLBACK_NAME)
        .to_string();

    if extension_of(&name).as_deref() == Some("doc") {
        return Err(IngestError::LegacyDoc);
    }

    let bytes = fs::read(path)?;
    prepare_upload_from_bytes(&name, &bytes)
}

/// In-memory variant backing [`prepare_upload`] and callers that already hold
/// the file contents.
pub fn prepare_upload_from_bytes(name: &str, bytes: &[u8]) -> Result<UploadedFile, IngestError> {
    match extension_of(name).as_deref() {
        Some("doc") => Err(IngestError::LegacyDoc),
        Some("docx") => {
            let text = extract_docx_text(bytes)?;
            log::debug!(
                "đã trích xuất {} ký tự văn bản từ '{}'",
                text.chars().count(),
                name
            );
            Ok(UploadedFile {
                name: name.to_string(),
                mime_type: "text/plain".to_string(),
                size_bytes: bytes.len() as u64,
                base64: BASE64.encode(text.as_bytes()),
            })
        }
        _ => Ok(UploadedFile {
            name: name.to_string(),
            mime_type: mime_guess::from_path(name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
            size_bytes: bytes.len() as u64,
            base64: BASE64.encode(bytes),
        }),
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Raw text of a `.docx` package: every paragraph of the main document, runs
/// concatenated, paragraphs joined with newlines.
fn extract_docx_text(bytes: &[u8]) -> Result<String, IngestError> {
    let docx = docx_rs::read_docx(bytes).map_err(|_| IngestError::DocxUnreadable)?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for p_child in &paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = p_child {
                    for r_child in &run.children {
                        if let docx_rs::RunChild::Text(text) = r_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_plain_text_passthrough() {
        let payload = prepare_upload_from_bytes("don_xin.txt", "Kính gửi".as_bytes()).unwrap();

        assert_eq!(payload.mime_type, "text/plain");
        assert_eq!(payload.size_bytes, "Kính gửi".len() as u64);
        assert_eq!(payload.base64, BASE64.encode("Kính gửi".as_bytes()));
    }

    #[test]
    fn test_pdf_is_tagged_by_extension() {
        let payload = prepare_upload_from_bytes("quyet_dinh.pdf", b"%PDF-1.7").unwrap();
        assert_eq!(payload.mime_type, "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let payload = prepare_upload_from_bytes("vanban.xyzab", b"\x00\x01").unwrap();
        assert_eq!(payload.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_legacy_doc_is_rejected() {
        let err = prepare_upload_from_bytes("cu.doc", b"\xd0\xcf\x11\xe0").unwrap_err();
        assert!(matches!(err, IngestError::LegacyDoc));
        assert!(err.to_string().contains(".docx"));
    }

    #[test]
    fn test_legacy_doc_path_is_rejected_before_any_read() {
        // The path does not exist: reaching the filesystem would surface an
        // io::Error, so LegacyDoc proves the extension check came first.
        let err = prepare_upload(Path::new("/khong/ton/tai/van_ban.DOC")).unwrap_err();
        assert!(matches!(err, IngestError::LegacyDoc));
    }

    #[test]
    fn test_docx_text_is_extracted_as_plain_text() {
        let bytes = docx_bytes(&["Đoạn thứ nhất.", "Đoạn thứ hai."]);
        let payload = prepare_upload_from_bytes("van_ban.docx", &bytes).unwrap();

        assert_eq!(payload.mime_type, "text/plain");
        assert_eq!(payload.size_bytes, bytes.len() as u64);
        let decoded = BASE64.decode(payload.base64).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "Đoạn thứ nhất.\nĐoạn thứ hai."
        );
    }

    #[test]
    fn test_corrupt_docx_is_unreadable() {
        let err = prepare_upload_from_bytes("hong.docx", b"khong phai zip").unwrap_err();
        assert!(matches!(err, IngestError::DocxUnreadable));
    }
}
