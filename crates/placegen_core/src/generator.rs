//! Sequential dispatcher: manifest -> emitter -> file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{GeneratorError, GeneratorResult};
use crate::format::DocumentFormat;
use crate::manifest::{DocumentDescriptor, Manifest};

/// Files written by one run, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub pdf: usize,
    pub docx: usize,
    pub xlsx: usize,
}

impl GenerationReport {
    fn record(&mut self, format: DocumentFormat, path: PathBuf) {
        match format {
            DocumentFormat::Pdf => self.pdf += 1,
            DocumentFormat::Docx => self.docx += 1,
            DocumentFormat::Xlsx => self.xlsx += 1,
        }
        self.written.push(path);
    }

    pub fn total(&self) -> usize {
        self.written.len()
    }
}

/// Writes placeholder files for a manifest into one output directory.
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
}

impl Generator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and any missing parents.
    pub fn prepare(&self) -> GeneratorResult<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            GeneratorError::DirectoryCreation {
                path: self.output_dir.clone(),
                source,
            }
        })?;
        debug!("Output directory ready: {}", self.output_dir.display());
        Ok(())
    }

    /// Render one descriptor and write it to `output_dir/filename`,
    /// overwriting any existing file.
    pub fn emit(&self, doc: &DocumentDescriptor) -> GeneratorResult<PathBuf> {
        let path = self.output_dir.join(doc.filename());
        let emitter_error = |source: anyhow::Error| GeneratorError::Emitter {
            format: doc.format(),
            filename: doc.filename().to_string(),
            source,
        };

        let bytes = doc.format().render(doc.title()).map_err(emitter_error)?;
        std::fs::write(&path, &bytes).map_err(|e| emitter_error(e.into()))?;

        info!("Created {}: {}", doc.format().label(), doc.filename());
        Ok(path)
    }

    /// Prepare the output directory, then emit every descriptor in order.
    ///
    /// The first failure stops the run. Files written before it stay on disk.
    pub fn generate(&self, manifest: &Manifest) -> GeneratorResult<GenerationReport> {
        self.prepare()?;
        if manifest.is_empty() {
            warn!("Manifest is empty, nothing to generate");
        }

        let mut report = GenerationReport::default();
        for doc in manifest {
            let path = self.emit(doc)?;
            report.record(doc.format(), path);
        }

        info!(
            "Generated {} files ({} PDF, {} DOCX, {} XLSX) in {}",
            report.total(),
            report.pdf,
            report.docx,
            report.xlsx,
            self.output_dir.display()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(entries: &[(&str, &str, DocumentFormat)]) -> Manifest {
        let docs = entries
            .iter()
            .map(|(f, t, fmt)| DocumentDescriptor::new(*f, *t, *fmt).unwrap())
            .collect();
        Manifest::new(docs).unwrap()
    }

    #[test]
    fn test_prepare_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("public").join("documents");
        Generator::new(&out).prepare().unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_prepare_fails_under_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let err = Generator::new(blocker.join("out")).prepare().unwrap_err();
        assert!(matches!(err, GeneratorError::DirectoryCreation { .. }));
    }

    #[test]
    fn test_report_counts_formats_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let generator = Generator::new(tmp.path());
        let report = generator
            .generate(&manifest(&[
                ("b.xlsx", "B", DocumentFormat::Xlsx),
                ("a.pdf", "A", DocumentFormat::Pdf),
                ("c.docx", "C", DocumentFormat::Docx),
                ("d.docx", "D", DocumentFormat::Docx),
            ]))
            .unwrap();

        assert_eq!(report.total(), 4);
        assert_eq!((report.pdf, report.docx, report.xlsx), (1, 2, 1));
        let names: Vec<_> = report
            .written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["b.xlsx", "a.pdf", "c.docx", "d.docx"]);
    }

    #[test]
    fn test_empty_manifest_only_prepares_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("empty");
        let generator = Generator::new(&out);
        assert_eq!(generator.output_dir(), out.as_path());

        let report = generator.generate(&Manifest::default()).unwrap();
        assert_eq!(report.total(), 0);
        assert!(out.is_dir());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_emit_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.pdf");
        std::fs::write(&path, b"stale").unwrap();

        let generator = Generator::new(tmp.path());
        let doc = DocumentDescriptor::new("a.pdf", "A", DocumentFormat::Pdf).unwrap();
        generator.emit(&doc).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_emit_failure_reports_descriptor() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory occupying the target path makes the write fail
        std::fs::create_dir(tmp.path().join("taken.docx")).unwrap();

        let generator = Generator::new(tmp.path());
        let doc = DocumentDescriptor::new("taken.docx", "Taken", DocumentFormat::Docx).unwrap();
        let err = generator.emit(&doc).unwrap_err();
        match err {
            GeneratorError::Emitter {
                format, filename, ..
            } => {
                assert_eq!(format, DocumentFormat::Docx);
                assert_eq!(filename, "taken.docx");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failure_aborts_remaining_descriptors() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("2.pdf")).unwrap();

        let generator = Generator::new(tmp.path());
        let result = generator.generate(&manifest(&[
            ("1.pdf", "One", DocumentFormat::Pdf),
            ("2.pdf", "Two", DocumentFormat::Pdf),
            ("3.pdf", "Three", DocumentFormat::Pdf),
        ]));

        assert!(result.is_err());
        // Partial completion is kept, later descriptors never run
        assert!(tmp.path().join("1.pdf").is_file());
        assert!(!tmp.path().join("3.pdf").exists());
    }
}
