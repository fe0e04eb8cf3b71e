//! Report projection: the plain-text review report handed to the UI shell's
//! copy-to-clipboard action.

use crate::document::Correction;

/// Build the report. Pure function of (summary, ledger); the layout is a
/// fixed literal, one numbered two-line block per ledger entry, 1-based, in
/// ledger order.
pub fn build_report(summary: &str, corrections: &[Correction]) -> String {
    let details = corrections
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. {}: \"{}\" -> \"{}\"\n   Lý do: {}",
                i + 1,
                c.section,
                c.original_text,
                c.corrected_text,
                c.reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "BÁO CÁO RÀ SOÁT VĂN BẢN (NGHỊ ĐỊNH 30)\n\
         ----------------------------------------\n\
         TÓM TẮT:\n\
         {summary}\n\
         \n\
         CHI TIẾT CÁC LỖI ĐÃ SỬA:\n\
         {details}\n\
         ----------------------------------------\n\
         (Tạo bởi Trợ lý Soạn thảo Văn bản)"
    )
}
