//! PDF placeholder generation.
//!
//! Writes a minimal single-page PDF 1.4 file by hand. Text uses the built-in
//! Helvetica font with WinAnsi encoding, so no font files are embedded and the
//! content stream stays uncompressed and searchable.

use anyhow::{Result, bail};

use crate::{REPLACE_NOTICE, placeholder_sentence};

/// Points per millimetre.
const MM: f64 = 72.0 / 25.4;

/// A4 portrait in points.
const PAGE_WIDTH: f64 = 595.28;
const PAGE_HEIGHT: f64 = 841.89;

const MARGIN: f64 = 10.0 * MM;
const LINE_HEIGHT: f64 = 10.0 * MM;
const HEADING_GAP: f64 = 20.0 * MM;

const HEADING_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 12.0;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Generate a single-page placeholder PDF for `title`.
///
/// The heading is centered at 16pt. Below a 20mm gap, both placeholder
/// sentences form one 12pt body block separated by a blank line and wrapped
/// to the page width.
///
/// Fails when the title holds a character the built-in font cannot encode.
pub fn generate_pdf_placeholder(title: &str) -> Result<Vec<u8>> {
    if let Some(c) = title
        .chars()
        .find(|c| !c.is_control() && winansi_byte(*c).is_none())
    {
        bail!(
            "Title character {c:?} (U+{:04X}) cannot be encoded with the built-in PDF font",
            c as u32
        );
    }

    let body = format!("{}\n\n{}", placeholder_sentence(title), REPLACE_NOTICE);
    let usable_width = PAGE_WIDTH - 2.0 * MARGIN;

    let mut content = String::new();
    let mut top = MARGIN;

    // Heading -- centered, never starting left of the margin
    let heading_width = text_width(title, HEADING_SIZE);
    let x = ((PAGE_WIDTH - heading_width) / 2.0).max(MARGIN);
    push_text(&mut content, HEADING_SIZE, x, baseline(top, HEADING_SIZE), title);
    top += LINE_HEIGHT + HEADING_GAP;

    // Body block
    for line in wrap_text(&body, BODY_SIZE, usable_width) {
        if top + LINE_HEIGHT > PAGE_HEIGHT - MARGIN {
            bail!(
                "Placeholder text for a {}-character title does not fit on a single page",
                title.chars().count()
            );
        }
        if !line.is_empty() {
            push_text(&mut content, BODY_SIZE, MARGIN, baseline(top, BODY_SIZE), &line);
        }
        top += LINE_HEIGHT;
    }

    let mut builder = PdfBuilder::new();
    builder.set_content(&content);
    Ok(builder.build(title))
}

/// Baseline y coordinate for text vertically centered in a line box whose top
/// edge sits `top` points below the top of the page.
fn baseline(top: f64, font_size: f64) -> f64 {
    PAGE_HEIGHT - (top + LINE_HEIGHT / 2.0 + 0.3 * font_size)
}

fn push_text(content: &mut String, font_size: f64, x: f64, y: f64, text: &str) {
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {font_size:.0} Tf\n"));
    content.push_str(&format!("{x:.2} {y:.2} Td\n"));
    content.push_str(&format!("({}) Tj\n", pdf_escape(text)));
    content.push_str("ET\n");
}

fn glyph_width(c: char) -> u16 {
    match c as u32 {
        code @ 32..=126 => HELVETICA_WIDTHS[(code - 32) as usize],
        _ => 556,
    }
}

/// Rendered width of `text` in points at `font_size`.
fn text_width(text: &str, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c))).sum();
    f64::from(units) * font_size / 1000.0
}

/// Greedy word wrap. `\n` forces a break and an empty input line yields an
/// empty output line. Words wider than `max_width` are split by character.
fn wrap_text(text: &str, font_size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();

        for word in hard_line.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                current.push(c);
                if text_width(&current, font_size) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// WinAnsi code for `c`, if the encoding has one.
fn winansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => Some(c as u8),
        '\u{20ac}' => Some(0x80),
        '\u{201a}' => Some(0x82),
        '\u{201e}' => Some(0x84),
        '\u{2026}' => Some(0x85),
        '\u{2020}' => Some(0x86),
        '\u{2021}' => Some(0x87),
        '\u{2030}' => Some(0x89),
        '\u{2039}' => Some(0x8b),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201c}' => Some(0x93),
        '\u{201d}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{2122}' => Some(0x99),
        '\u{203a}' => Some(0x9b),
        _ => None,
    }
}

/// Escape text for a PDF string literal under WinAnsi encoding.
///
/// Codes above ASCII become octal escapes and control characters become
/// spaces. Callers reject unencodable text first; any left over is written
/// as `?`.
fn pdf_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if c.is_control() => out.push(' '),
            c => match winansi_byte(c) {
                Some(b) if b.is_ascii() => out.push(c),
                Some(b) => out.push_str(&format!("\\{b:03o}")),
                None => out.push('?'),
            },
        }
    }
    out
}

/// Minimal PDF file builder. Constructs valid PDF 1.4 files.
struct PdfBuilder {
    content: String,
}

impl PdfBuilder {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Build the complete PDF file as bytes.
    ///
    /// Every string written here is ASCII, so byte offsets equal `String::len`.
    fn build(&self, title: &str) -> Vec<u8> {
        let mut pdf = String::new();
        let mut offsets: Vec<usize> = Vec::new();

        // Header
        pdf.push_str("%PDF-1.4\n");

        // Obj 1: Catalog
        offsets.push(pdf.len());
        pdf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        // Obj 2: Pages
        offsets.push(pdf.len());
        pdf.push_str("2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

        // Obj 3: Page
        offsets.push(pdf.len());
        pdf.push_str("3 0 obj\n<< /Type /Page /Parent 2 0 R ");
        pdf.push_str(&format!("/MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] "));
        pdf.push_str("/Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n");

        // Obj 4: Content stream
        offsets.push(pdf.len());
        let stream = &self.content;
        pdf.push_str(&format!(
            "4 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
            stream.len(),
            stream
        ));

        // Obj 5: Font (Helvetica)
        offsets.push(pdf.len());
        pdf.push_str(
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>\nendobj\n",
        );

        // Obj 6: Info (title)
        offsets.push(pdf.len());
        pdf.push_str(&format!(
            "6 0 obj\n<< /Title ({}) /Producer (placegen) >>\nendobj\n",
            pdf_escape(title)
        ));

        // Cross-reference table
        let xref_offset = pdf.len();
        let num_objects = offsets.len() + 1; // +1 for free entry
        pdf.push_str(&format!("xref\n0 {num_objects}\n"));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }

        // Trailer
        pdf.push_str(&format!(
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info 6 0 R >>\n"
        ));
        pdf.push_str(&format!("startxref\n{xref_offset}\n%%EOF\n"));

        pdf.into_bytes()
    }
}
