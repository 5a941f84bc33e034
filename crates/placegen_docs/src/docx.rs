use anyhow::Result;
use docx_rs::*;
use std::io::Cursor;

use crate::{REPLACE_NOTICE, placeholder_sentence};

/// Style id of the top-level document heading.
pub const TITLE_STYLE: &str = "Title";

/// Generate a placeholder DOCX document for `title`.
///
/// The title goes in a paragraph styled `Title`. The two placeholder sentences
/// follow as two separate paragraphs rather than one paragraph with a break.
pub fn generate_docx_placeholder(title: &str) -> Result<Vec<u8>> {
    let title_style = Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name(TITLE_STYLE)
        .size(56); // half-points, so 56 = 28pt

    let docx = Docx::new()
        .add_style(title_style)
        .add_paragraph(
            Paragraph::new()
                .style(TITLE_STYLE)
                .add_run(Run::new().add_text(title)),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(placeholder_sentence(title))))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(REPLACE_NOTICE)));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| anyhow::anyhow!("Failed to pack DOCX: {}", e))?;

    Ok(buf.into_inner())
}
