//! Export projection: one [`StructuredDocument`] to the Decree 30 letterhead
//! DOCX.
//!
//! The typographic rules are fixed by the legal template and must not drift:
//! margins 2/2/3/1.5 cm, Times New Roman throughout, a borderless two-column
//! letterhead table, justified body paragraphs with a 567-twip first-line
//! indent, and a borderless two-column recipients/signature table.

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts,
    SpecialIndentType, Table, TableBorders, TableCell, TableRow, VAlignType, WidthType,
};

use crate::document::StructuredDocument;

use super::defaults::{self, or_default};
use super::{
    recipients_block, RenderError, FONT, HEADER_RULE, RECIPIENTS_LABEL, SIZE_LABEL, SIZE_NORMAL,
    SIZE_RECIPIENT, SIZE_RULE, SIZE_SMALL,
};

// Page margins in twips: top/bottom 2cm, left 3cm, right 1.5cm.
const MARGIN_TOP: i32 = 1134;
const MARGIN_BOTTOM: i32 = 1134;
const MARGIN_LEFT: i32 = 1701;
const MARGIN_RIGHT: i32 = 850;

// Cell widths in fiftieths of a percent: two equal columns.
const FULL_WIDTH_PCT: usize = 5000;
const HALF_WIDTH_PCT: usize = 2500;

const FIRST_LINE_INDENT: i32 = 567; // ~1cm
const BODY_LINE: i32 = 276; // 1.15 line spacing in 240ths
const SIGNATURE_GAP: u32 = 1200; // ~24pt reserved for the physical signature

/// Build the export artifact. Pure and atomic: identical input produces
/// identical bytes, and a failure produces no bytes at all.
pub fn build_docx(doc: &StructuredDocument) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TOP)
                .bottom(MARGIN_BOTTOM)
                .left(MARGIN_LEFT)
                .right(MARGIN_RIGHT),
        )
        .default_fonts(serif())
        .add_table(header_table(doc))
        .add_paragraph(title_paragraph(&doc.body.title));

    for paragraph in &doc.body.paragraphs {
        docx = docx.add_paragraph(body_paragraph(paragraph));
    }

    docx = docx
        // Spacer between the body and the signature table.
        .add_paragraph(Paragraph::new().line_spacing(LineSpacing::new().before(400)))
        .add_table(footer_table(doc));

    // Bytes exist only behind Ok: a pack failure returns before the buffer
    // leaves this function, so the caller never sees a partial file.
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).map_err(|e| {
        log::error!("đóng gói file DOCX thất bại: {e}");
        RenderError::ExportFailed
    })?;

    Ok(cursor.into_inner())
}

fn serif() -> RunFonts {
    RunFonts::new().ascii(FONT).hi_ansi(FONT).east_asia(FONT)
}

/// A run in the template face, with embedded newlines becoming line breaks.
fn text_run(text: &str, size: usize) -> Run {
    let mut run = Run::new().fonts(serif()).size(size);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn centered(run: Run) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(run)
}

fn borderless_half_cell() -> TableCell {
    TableCell::new()
        .width(HALF_WIDTH_PCT, WidthType::Pct)
        .vertical_align(VAlignType::Top)
}

fn borderless_table(row: TableRow) -> Table {
    Table::new(vec![row])
        .set_borders(TableBorders::with_empty())
        .width(FULL_WIDTH_PCT, WidthType::Pct)
}

fn header_table(doc: &StructuredDocument) -> Table {
    let header = &doc.header;

    let agency_cell = borderless_half_cell()
        .add_paragraph(centered(
            text_run(
                or_default(header.agency_name.as_deref(), defaults::AGENCY_NAME),
                SIZE_SMALL,
            )
            .bold(),
        ))
        .add_paragraph(
            centered(text_run(
                or_default(header.agency_number.as_deref(), defaults::AGENCY_NUMBER),
                SIZE_SMALL,
            ))
            .line_spacing(LineSpacing::new().after(100)),
        );

    let national_cell = borderless_half_cell()
        .add_paragraph(centered(
            text_run(
                or_default(Some(&header.national_name), defaults::NATIONAL_NAME),
                SIZE_SMALL,
            )
            .bold(),
        ))
        .add_paragraph(centered(
            text_run(or_default(Some(&header.motto), defaults::MOTTO), SIZE_NORMAL).bold(),
        ))
        .add_paragraph(centered(text_run(HEADER_RULE, SIZE_RULE).bold()))
        .add_paragraph(
            centered(
                text_run(
                    or_default(header.date.as_deref(), defaults::DATE_LINE),
                    SIZE_SMALL,
                )
                .italic(),
            )
            .line_spacing(LineSpacing::new().before(100)),
        );

    borderless_table(TableRow::new(vec![agency_cell, national_cell]))
}

fn title_paragraph(title: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().before(400).after(240))
        .add_run(text_run(title, SIZE_NORMAL).bold())
}

fn body_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Both)
        .line_spacing(LineSpacing::new().after(120).line(BODY_LINE))
        .indent(None, Some(SpecialIndentType::FirstLine(FIRST_LINE_INDENT)), None, None)
        .add_run(text_run(text, SIZE_NORMAL))
}

fn footer_table(doc: &StructuredDocument) -> Table {
    let footer = &doc.footer;

    let mut recipients_cell = borderless_half_cell();
    match recipients_block(footer) {
        Some(list) => {
            recipients_cell = recipients_cell.add_paragraph(
                Paragraph::new().add_run(text_run(RECIPIENTS_LABEL, SIZE_LABEL).bold().italic()),
            );
            for recipient in list {
                recipients_cell = recipients_cell.add_paragraph(
                    Paragraph::new()
                        .add_run(text_run(&format!("- {recipient}"), SIZE_RECIPIENT)),
                );
            }
        }
        // A table cell still needs one (empty) paragraph.
        None => recipients_cell = recipients_cell.add_paragraph(Paragraph::new()),
    }

    let signature_cell = borderless_half_cell()
        .add_paragraph(centered(
            text_run(
                or_default(Some(&footer.signer_title), defaults::SIGNER_TITLE),
                SIZE_NORMAL,
            )
            .bold(),
        ))
        .add_paragraph(
            centered(text_run(&footer.signer_name, SIZE_NORMAL).bold())
                .line_spacing(LineSpacing::new().before(SIGNATURE_GAP)),
        );

    borderless_table(TableRow::new(vec![recipients_cell, signature_cell]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Body, Footer, Header};

    fn blank_header_doc(recipients: Option<Vec<String>>) -> StructuredDocument {
        StructuredDocument {
            header: Header {
                agency_name: None,
                agency_number: None,
                national_name: String::new(),
                motto: String::new(),
                date: None,
            },
            body: Body {
                title: "QUYẾT ĐỊNH".to_string(),
                paragraphs: vec!["Đoạn 1.".to_string(), "Đoạn 2.".to_string()],
            },
            footer: Footer {
                recipients,
                signer_title: String::new(),
                signer_name: "Nguyễn Văn A".to_string(),
            },
        }
    }

    /// Every visible string of the packed document, in document order.
    fn visible_text(bytes: &[u8]) -> String {
        let docx = docx_rs::read_docx(bytes).unwrap();
        let mut out = String::new();
        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(p) => push_paragraph(p, &mut out),
                docx_rs::DocumentChild::Table(table) => {
                    for docx_rs::TableChild::TableRow(row) in &table.rows {
                        for docx_rs::TableRowChild::TableCell(cell) in &row.cells {
                            for content in &cell.children {
                                if let docx_rs::TableCellContent::Paragraph(p) = content {
                                    push_paragraph(p, &mut out);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn push_paragraph(paragraph: &docx_rs::Paragraph, out: &mut String) {
        for child in &paragraph.children {
            if let docx_rs::ParagraphChild::Run(run) = child {
                for r_child in &run.children {
                    if let docx_rs::RunChild::Text(text) = r_child {
                        out.push_str(&text.text);
                    }
                }
            }
        }
        out.push('\n');
    }

    #[test]
    fn test_export_is_a_zip_package() {
        let bytes = build_docx(&blank_header_doc(None)).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_borderless_tables_pack_and_reparse() {
        // The letterhead and signature tables are built with cleared borders;
        // the packed document must still round-trip through the reader with
        // both tables intact.
        let bytes = build_docx(&blank_header_doc(Some(vec!["Lưu: VT".to_string()]))).unwrap();
        let docx = docx_rs::read_docx(&bytes).unwrap();

        let tables = docx
            .document
            .children
            .iter()
            .filter(|child| matches!(child, docx_rs::DocumentChild::Table(_)))
            .count();
        assert_eq!(tables, 2);
    }

    #[test]
    fn test_blank_header_fields_get_decree_defaults() {
        let bytes = build_docx(&blank_header_doc(None)).unwrap();
        let text = visible_text(&bytes);

        assert!(text.contains("CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM"));
        assert!(text.contains("Độc lập - Tự do - Hạnh phúc"));
        assert!(text.contains("..., ngày ... tháng ... năm ..."));
        assert!(text.contains("TÊN CƠ QUAN"));
        assert!(text.contains("THỦ TRƯỞNG CƠ QUAN"));
    }

    #[test]
    fn test_absent_recipients_omit_the_block() {
        let bytes = build_docx(&blank_header_doc(None)).unwrap();
        assert!(!visible_text(&bytes).contains("Nơi nhận:"));
    }

    #[test]
    fn test_empty_recipients_omit_the_block() {
        let bytes = build_docx(&blank_header_doc(Some(vec![]))).unwrap();
        assert!(!visible_text(&bytes).contains("Nơi nhận:"));
    }

    #[test]
    fn test_recipients_render_as_dashed_lines_in_order() {
        let bytes = build_docx(&blank_header_doc(Some(vec![
            "Sở A".to_string(),
            "Sở B".to_string(),
        ])))
        .unwrap();
        let text = visible_text(&bytes);

        let label = text.find("Nơi nhận:").unwrap();
        let first = text.find("- Sở A").unwrap();
        let second = text.find("- Sở B").unwrap();
        assert!(label < first && first < second);
    }

    #[test]
    fn test_body_paragraphs_keep_source_order() {
        let bytes = build_docx(&blank_header_doc(None)).unwrap();
        let text = visible_text(&bytes);

        let title = text.find("QUYẾT ĐỊNH").unwrap();
        let first = text.find("Đoạn 1.").unwrap();
        let second = text.find("Đoạn 2.").unwrap();
        assert!(title < first && first < second);
    }

    #[test]
    fn test_export_is_deterministic() {
        let doc = blank_header_doc(Some(vec!["Lưu: VT".to_string()]));
        let first = build_docx(&doc).unwrap();
        let second = build_docx(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multiline_title_survives_as_one_block() {
        let mut doc = blank_header_doc(None);
        doc.body.title = "QUYẾT ĐỊNH\nVề việc ban hành quy chế".to_string();

        let text = visible_text(&build_docx(&doc).unwrap());
        assert!(text.contains("QUYẾT ĐỊNH"));
        assert!(text.contains("Về việc ban hành quy chế"));
    }
}
