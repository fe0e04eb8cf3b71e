//! Fixed instruction prompt and the declared JSON response schema.
//!
//! The schema mirrors [`crate::document::models`]: the model must return the
//! plain-text rendition, the structured document, the correction ledger, and
//! a summary.

use serde_json::{json, Value};

/// Instruction sent with every document, verbatim.
pub const INSTRUCTION_PROMPT: &str = "\
Bạn là chuyên gia soạn thảo văn bản hành chính theo Nghị định 30/2020/NĐ-CP.
Nhiệm vụ:
1. Phân tích văn bản đầu vào, sửa lỗi chính tả và định dạng nội dung cho trang trọng, đúng quy chuẩn.
2. TRÍCH XUẤT cấu trúc văn bản thành các thành phần riêng biệt (Header, Body, Footer) để phục vụ việc in ấn bố cục 2 cột (Quốc hiệu/Tên cơ quan).
   - Nếu văn bản thiếu thông tin (ví dụ thiếu Quốc hiệu, Tiêu ngữ), hãy tự động bổ sung cho đúng chuẩn Nghị định 30.
   - Tên cơ quan chủ quản và tên cơ quan ban hành phải viết hoa đúng quy định.
   - Quốc hiệu: \"CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM\". Tiêu ngữ: \"Độc lập - Tự do - Hạnh phúc\".
3. Liệt kê các lỗi đã sửa.";

/// Structured-output schema declared to the model.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "formattedDocument": {
                "type": "STRING",
                "description": "Toàn bộ nội dung văn bản dạng text thuần để hiển thị xem trước."
            },
            "structuredDocument": {
                "type": "OBJECT",
                "description": "Cấu trúc chi tiết để tạo file Word.",
                "properties": {
                    "header": {
                        "type": "OBJECT",
                        "properties": {
                            "agencyName": {
                                "type": "STRING",
                                "description": "Tên cơ quan ban hành (viết hoa, ngắt dòng hợp lý). VD: ỦY BAN NHÂN DÂN\nTỈNH LÀO CAI"
                            },
                            "agencyNumber": {
                                "type": "STRING",
                                "description": "Số và ký hiệu văn bản. VD: Số: 12/UBND-VP"
                            },
                            "nationalName": {
                                "type": "STRING",
                                "description": "Luôn là: CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM"
                            },
                            "motto": {
                                "type": "STRING",
                                "description": "Luôn là: Độc lập - Tự do - Hạnh phúc"
                            },
                            "date": {
                                "type": "STRING",
                                "description": "Địa danh và ngày tháng. VD: Lào Cai, ngày 10 tháng 01 năm 2024"
                            }
                        },
                        "required": ["agencyName", "nationalName", "motto"]
                    },
                    "body": {
                        "type": "OBJECT",
                        "properties": {
                            "title": {
                                "type": "STRING",
                                "description": "Tên loại văn bản và trích yếu. Viết hoa in đậm. VD: QUYẾT ĐỊNH\nVề việc..."
                            },
                            "paragraphs": {
                                "type": "ARRAY",
                                "items": { "type": "STRING" },
                                "description": "Danh sách các đoạn văn nội dung chính."
                            }
                        },
                        "required": ["title", "paragraphs"]
                    },
                    "footer": {
                        "type": "OBJECT",
                        "properties": {
                            "recipients": {
                                "type": "ARRAY",
                                "items": { "type": "STRING" },
                                "description": "Danh sách nơi nhận. Bắt đầu bằng 'Nơi nhận:'"
                            },
                            "signerTitle": {
                                "type": "STRING",
                                "description": "Chức vụ người ký. VD: TM. ỦY BAN NHÂN DÂN\nCHỦ TỊCH"
                            },
                            "signerName": {
                                "type": "STRING",
                                "description": "Họ và tên người ký."
                            }
                        }
                    }
                },
                "required": ["header", "body", "footer"]
            },
            "summary": {
                "type": "STRING",
                "description": "Tóm tắt ngắn gọn thay đổi."
            },
            "corrections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "section": { "type": "STRING" },
                        "originalText": { "type": "STRING" },
                        "correctedText": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["section", "originalText", "correctedText", "reason"]
                }
            }
        },
        "required": ["formattedDocument", "structuredDocument", "summary", "corrections"]
    })
}
