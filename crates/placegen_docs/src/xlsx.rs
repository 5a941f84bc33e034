use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::REPLACE_NOTICE;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// First placeholder line for spreadsheets.
pub const SPREADSHEET_NOTICE: &str = "This is a placeholder spreadsheet.";

/// Generate a placeholder XLSX workbook for `title`.
///
/// One worksheet with the title in A1 and the two placeholder lines in A3 and
/// A4. Row 2 stays empty and formatting is left at library defaults.
pub fn generate_xlsx_placeholder(title: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .with_context(|| format!("Failed to set sheet name: {SHEET_NAME}"))?;

    let cells = [(0, title), (2, SPREADSHEET_NOTICE), (3, REPLACE_NOTICE)];
    for (row, text) in cells {
        worksheet
            .write_string(row, 0, text)
            .with_context(|| format!("Failed to write string at ({row}, 0)"))?;
    }

    let bytes = workbook
        .save_to_buffer()
        .context("Failed to save workbook to buffer")?;

    Ok(bytes)
}
