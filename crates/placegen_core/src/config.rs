use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GeneratorError, GeneratorResult};
use crate::manifest::{Manifest, RawDescriptor};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "placegen.json";

/// Output directory used when the config does not set one.
pub const DEFAULT_OUTPUT_DIR: &str = "public/documents";

/// Generator configuration, optionally read from `placegen.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacegenConfig {
    /// Directory every file is written into. Created if missing.
    pub output_dir: PathBuf,
    /// Documents to generate, in order.
    pub documents: Vec<RawDescriptor>,
}

impl Default for PlacegenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            documents: Manifest::default_documents(),
        }
    }
}

impl PlacegenConfig {
    /// Returns the base directory: `~/.placegen/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".placegen"))
    }

    /// Returns the logs directory: `~/.placegen/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Load config from a specific file path, or defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error. No file is
    /// ever written.
    pub fn load_from_path(path: &Path) -> GeneratorResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| GeneratorError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate the configured documents into a manifest.
    pub fn manifest(&self) -> GeneratorResult<Manifest> {
        Manifest::from_raw(&self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacegenConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("public/documents"));
        assert_eq!(config.documents.len(), 14);
        assert_eq!(config.manifest().unwrap().len(), 14);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        let config = PlacegenConfig::load_from_path(&path).unwrap();
        assert_eq!(config, PlacegenConfig::default());
        // Loading never creates the file
        assert!(!path.exists());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "output_dir": "out" }"#).unwrap();

        let config = PlacegenConfig::load_from_path(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.documents, Manifest::default_documents());
    }

    #[test]
    fn test_load_custom_documents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{
                "output_dir": "out",
                "documents": [{ "filename": "A.docx", "title": "A", "type": "docx" }]
            }"#,
        )
        .unwrap();

        let config = PlacegenConfig::load_from_path(&path).unwrap();
        let manifest = config.manifest().unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.documents()[0].title(), "A");
    }

    #[test]
    fn test_load_corrupt_config_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = PlacegenConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::Config { .. }));
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = PlacegenConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"type\": \"xlsx\""));
        let parsed: PlacegenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_logs_dir_under_base_dir() {
        if let (Ok(base), Ok(logs)) = (PlacegenConfig::base_dir(), PlacegenConfig::logs_dir()) {
            assert!(logs.starts_with(&base));
            assert!(base.ends_with(".placegen"));
        }
    }
}
