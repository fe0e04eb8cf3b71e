//! Decode and validate the correction model's JSON payload.
//!
//! Mirrors the response schema declared in [`crate::oracle::prompt`]: the two
//! top-level carriers must be present, then the typed model enforces the
//! required sub-fields. No semantic validation beyond that: any string
//! content is accepted, including free-form dates.

use serde_json::Value;
use thiserror::Error;

use super::models::Review;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// `formattedDocument` or `structuredDocument` is missing entirely.
    #[error("Phản hồi từ AI thiếu dữ liệu cấu trúc.")]
    MissingStructuredData,
    /// A required sub-field is missing or has the wrong shape.
    #[error("Phản hồi từ AI sai cấu trúc: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Validate a decoded payload and produce the immutable [`Review`].
pub fn decode_review(payload: Value) -> Result<Review, SchemaError> {
    let carriers_present = payload
        .as_object()
        .map(|obj| obj.contains_key("formattedDocument") && obj.contains_key("structuredDocument"))
        .unwrap_or(false);
    if !carriers_present {
        return Err(SchemaError::MissingStructuredData);
    }

    serde_json::from_value(payload).map_err(SchemaError::Shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "formattedDocument": "QUYẾT ĐỊNH\nĐiều 1.",
            "structuredDocument": {
                "header": {
                    "nationalName": "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM",
                    "motto": "Độc lập - Tự do - Hạnh phúc"
                },
                "body": { "title": "QUYẾT ĐỊNH", "paragraphs": ["Điều 1."] },
                "footer": { "signerTitle": "CHỦ TỊCH", "signerName": "A" }
            },
            "corrections": [{
                "section": "Thể thức",
                "originalText": "cong hoa",
                "correctedText": "CỘNG HÒA",
                "reason": "Sai chính tả"
            }],
            "summary": "Đã sửa 1 lỗi."
        })
    }

    #[test]
    fn test_decode_full_payload() {
        let review = decode_review(full_payload()).unwrap();
        assert_eq!(review.structured_document.body.title, "QUYẾT ĐỊNH");
        assert_eq!(review.corrections.len(), 1);
        assert_eq!(review.summary, "Đã sửa 1 lỗi.");
    }

    #[test]
    fn test_missing_structured_document_is_rejected() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("structuredDocument");

        let err = decode_review(payload).unwrap_err();
        assert!(matches!(err, SchemaError::MissingStructuredData));
        assert!(err.to_string().contains("thiếu dữ liệu cấu trúc"));
    }

    #[test]
    fn test_missing_formatted_document_is_rejected() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("formattedDocument");

        assert!(matches!(
            decode_review(payload),
            Err(SchemaError::MissingStructuredData)
        ));
    }

    #[test]
    fn test_missing_body_title_is_a_shape_error() {
        let mut payload = full_payload();
        payload["structuredDocument"]["body"]
            .as_object_mut()
            .unwrap()
            .remove("title");

        assert!(matches!(decode_review(payload), Err(SchemaError::Shape(_))));
    }

    #[test]
    fn test_agency_name_is_not_required() {
        // The schema leaves agencyName optional even though nationalName and
        // motto are mandatory.
        let review = decode_review(full_payload()).unwrap();
        assert_eq!(review.structured_document.header.agency_name, None);
    }

    #[test]
    fn test_missing_corrections_defaults_to_empty_ledger() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("corrections");
        payload.as_object_mut().unwrap().remove("summary");

        let review = decode_review(payload).unwrap();
        assert!(review.corrections.is_empty());
        assert_eq!(review.summary, "");
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(matches!(
            decode_review(json!("chỉ là chuỗi")),
            Err(SchemaError::MissingStructuredData)
        ));
    }
}
