//! Document descriptors and the manifest that orders them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};
use crate::format::DocumentFormat;

/// One output file: its name, display title and format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDescriptor {
    filename: String,
    title: String,
    format: DocumentFormat,
}

impl DocumentDescriptor {
    /// Build a descriptor, checking that `filename` is a plain file name whose
    /// extension matches `format`.
    pub fn new(
        filename: impl Into<String>,
        title: impl Into<String>,
        format: DocumentFormat,
    ) -> GeneratorResult<Self> {
        let filename = filename.into();
        validate_filename(&filename, format)?;
        Ok(Self {
            filename,
            title: title.into(),
            format,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

/// Untyped descriptor as it appears in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDescriptor {
    pub filename: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RawDescriptor {
    pub fn new(filename: &str, title: &str, kind: &str) -> Self {
        Self {
            filename: filename.to_string(),
            title: title.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl TryFrom<&RawDescriptor> for DocumentDescriptor {
    type Error = GeneratorError;

    fn try_from(raw: &RawDescriptor) -> Result<Self, Self::Error> {
        let format: DocumentFormat = raw.kind.parse()?;
        DocumentDescriptor::new(raw.filename.as_str(), raw.title.as_str(), format)
    }
}

fn validate_filename(filename: &str, format: DocumentFormat) -> GeneratorResult<()> {
    let invalid = |reason: &str| GeneratorError::InvalidDescriptor {
        filename: filename.to_string(),
        reason: reason.to_string(),
    };

    if filename.trim().is_empty() {
        return Err(invalid("filename is empty"));
    }
    if filename.contains(['/', '\\']) || filename == "." || filename == ".." {
        return Err(invalid("filename must not contain path components"));
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case(format.extension()) {
        return Err(invalid(&format!(
            "expected a .{} extension for {} output",
            format.extension(),
            format.label()
        )));
    }

    Ok(())
}

/// Ordered list of descriptors processed in one run.
///
/// Filenames are unique ignoring ASCII case, so no two descriptors write the
/// same file even on case-insensitive filesystems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    documents: Vec<DocumentDescriptor>,
}

impl Manifest {
    pub fn new(documents: Vec<DocumentDescriptor>) -> GeneratorResult<Self> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.filename().to_ascii_lowercase()) {
                return Err(GeneratorError::DuplicateFilename(doc.filename().to_string()));
            }
        }
        Ok(Self { documents })
    }

    /// Validate raw config entries into a manifest. The first bad entry wins.
    pub fn from_raw(raw: &[RawDescriptor]) -> GeneratorResult<Self> {
        let documents = raw
            .iter()
            .map(DocumentDescriptor::try_from)
            .collect::<GeneratorResult<Vec<_>>>()?;
        Self::new(documents)
    }

    /// The documentation set generated when no config file overrides it.
    pub fn default_documents() -> Vec<RawDescriptor> {
        vec![
            RawDescriptor::new(
                "Change_Order_Proposal_Template.pdf",
                "Change Order Proposal Template",
                "pdf",
            ),
            RawDescriptor::new(
                "Gemini_FY25_Pricing_Guide.xlsx",
                "Gemini FY25 Pricing Guide",
                "xlsx",
            ),
            RawDescriptor::new(
                "Closeout_Maintenance_Warranty.docx",
                "Closeout: Maintenance & Warranty",
                "docx",
            ),
            RawDescriptor::new(
                "Signage_Takeoff_Example.docx",
                "Signage Takeoff Example",
                "docx",
            ),
            RawDescriptor::new(
                "Warranty_Maintenance_Info.docx",
                "Warranty & Maintenance Info",
                "docx",
            ),
            RawDescriptor::new(
                "Unconditional_Sub_Lien_Waiver.docx",
                "Unconditional Sub Lien Waiver",
                "docx",
            ),
            RawDescriptor::new(
                "Change_Order_Example_LCS.pdf",
                "Change Order Example (LCS)",
                "pdf",
            ),
            RawDescriptor::new(
                "Sample_COI_Moon_River.pdf",
                "Sample COI for Moon River",
                "pdf",
            ),
            RawDescriptor::new(
                "Combined_Lien_Waiver_Sample.pdf",
                "Combined Lien Waiver Sample",
                "pdf",
            ),
            RawDescriptor::new(
                "COI_Requirements_Template.docx",
                "COI Requirements Template",
                "docx",
            ),
            RawDescriptor::new(
                "Schedule_of_Values_Example.docx",
                "Schedule of Values Example",
                "docx",
            ),
            RawDescriptor::new(
                "Trello_Project_Setup_Checklist.docx",
                "Trello Project Setup Checklist",
                "docx",
            ),
            RawDescriptor::new(
                "Latest_Bid_Document_Template.docx",
                "Latest Bid Document Template",
                "docx",
            ),
            RawDescriptor::new("RFP_Response_Example.docx", "RFP Response Example", "docx"),
        ]
    }

    pub fn documents(&self) -> &[DocumentDescriptor] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentDescriptor> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a DocumentDescriptor;
    type IntoIter = std::slice::Iter<'a, DocumentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
