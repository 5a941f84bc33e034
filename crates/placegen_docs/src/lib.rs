// Placeholder document emitters (PDF, DOCX, XLSX).
//
// Each emitter renders a title into the bytes of a complete file. Writing to
// disk is left to the caller.

pub mod docx;
pub mod pdf;
pub mod xlsx;

pub use docx::generate_docx_placeholder;
pub use pdf::generate_pdf_placeholder;
pub use xlsx::generate_xlsx_placeholder;

/// Second placeholder line, shared by every format.
pub const REPLACE_NOTICE: &str = "Replace this file with the actual content when available.";

/// First placeholder line for document formats (PDF and DOCX).
pub fn placeholder_sentence(title: &str) -> String {
    format!("This is a placeholder document for '{title}'.")
}
