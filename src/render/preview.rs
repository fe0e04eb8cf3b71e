//! Preview projection: a serializable tree of display nodes for the UI shell.
//!
//! Mirrors the export layout node for node, with the same default table,
//! recipients rule, and run sizes, so the on-screen preview can never diverge
//! from the downloaded file.

use serde::Serialize;

use crate::document::StructuredDocument;

use super::defaults::{self, or_default};
use super::{
    recipients_block, FONT, HEADER_RULE, RECIPIENTS_LABEL, SIZE_LABEL, SIZE_NORMAL,
    SIZE_RECIPIENT, SIZE_RULE, SIZE_SMALL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
    Justified,
}

/// Run styling in the template face; `size` is in half-points, matching the
/// export runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub size: usize,
}

impl TextStyle {
    fn plain(size: usize) -> Self {
        Self { bold: false, italic: false, size }
    }

    fn bold(size: usize) -> Self {
        Self { bold: true, italic: false, size }
    }

    fn italic(size: usize) -> Self {
        Self { bold: false, italic: true, size }
    }

    fn bold_italic(size: usize) -> Self {
        Self { bold: true, italic: true, size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreviewNode {
    /// Two borderless columns, as in the letterhead and signature tables.
    TwoColumn {
        left: Vec<PreviewNode>,
        right: Vec<PreviewNode>,
    },
    Text {
        text: String,
        align: TextAlign,
        style: TextStyle,
        /// First-line indent, body paragraphs only.
        indented: bool,
    },
    Spacer,
}

impl PreviewNode {
    fn text(text: impl Into<String>, align: TextAlign, style: TextStyle) -> Self {
        Self::Text {
            text: text.into(),
            align,
            style,
            indented: false,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            align: TextAlign::Justified,
            style: TextStyle::plain(SIZE_NORMAL),
            indented: true,
        }
    }
}

/// Typeface the whole preview renders in.
pub const PREVIEW_FONT: &str = FONT;

/// Build the preview tree. Pure and deterministic, field-for-field consistent
/// with [`super::build_docx`].
pub fn build_preview(doc: &StructuredDocument) -> Vec<PreviewNode> {
    let mut nodes = vec![header_columns(doc)];

    nodes.push(PreviewNode::text(
        &doc.body.title,
        TextAlign::Center,
        TextStyle::bold(SIZE_NORMAL),
    ));
    for paragraph in &doc.body.paragraphs {
        nodes.push(PreviewNode::body(paragraph));
    }

    nodes.push(PreviewNode::Spacer);
    nodes.push(footer_columns(doc));
    nodes
}

fn header_columns(doc: &StructuredDocument) -> PreviewNode {
    let header = &doc.header;

    PreviewNode::TwoColumn {
        left: vec![
            PreviewNode::text(
                or_default(header.agency_name.as_deref(), defaults::AGENCY_NAME),
                TextAlign::Center,
                TextStyle::bold(SIZE_SMALL),
            ),
            PreviewNode::text(
                or_default(header.agency_number.as_deref(), defaults::AGENCY_NUMBER),
                TextAlign::Center,
                TextStyle::plain(SIZE_SMALL),
            ),
        ],
        right: vec![
            PreviewNode::text(
                or_default(Some(&header.national_name), defaults::NATIONAL_NAME),
                TextAlign::Center,
                TextStyle::bold(SIZE_SMALL),
            ),
            PreviewNode::text(
                or_default(Some(&header.motto), defaults::MOTTO),
                TextAlign::Center,
                TextStyle::bold(SIZE_NORMAL),
            ),
            PreviewNode::text(HEADER_RULE, TextAlign::Center, TextStyle::bold(SIZE_RULE)),
            PreviewNode::text(
                or_default(header.date.as_deref(), defaults::DATE_LINE),
                TextAlign::Center,
                TextStyle::italic(SIZE_SMALL),
            ),
        ],
    }
}

fn footer_columns(doc: &StructuredDocument) -> PreviewNode {
    let footer = &doc.footer;

    let left = match recipients_block(footer) {
        Some(list) => {
            let mut column = vec![PreviewNode::text(
                RECIPIENTS_LABEL,
                TextAlign::Left,
                TextStyle::bold_italic(SIZE_LABEL),
            )];
            column.extend(list.iter().map(|recipient| {
                PreviewNode::text(
                    format!("- {recipient}"),
                    TextAlign::Left,
                    TextStyle::plain(SIZE_RECIPIENT),
                )
            }));
            column
        }
        None => vec![],
    };

    PreviewNode::TwoColumn {
        left,
        right: vec![
            PreviewNode::text(
                or_default(Some(&footer.signer_title), defaults::SIGNER_TITLE),
                TextAlign::Center,
                TextStyle::bold(SIZE_NORMAL),
            ),
            PreviewNode::Spacer,
            PreviewNode::text(
                &footer.signer_name,
                TextAlign::Center,
                TextStyle::bold(SIZE_NORMAL),
            ),
        ],
    }
}
