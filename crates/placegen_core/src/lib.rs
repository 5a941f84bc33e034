//! Placegen core: manifest, dispatch, configuration and logging.
//!
//! A [`Manifest`] of [`DocumentDescriptor`]s is handed to a [`Generator`],
//! which renders each descriptor with the emitter for its [`DocumentFormat`]
//! and writes the result into the output directory, in order.
//!
//! ```rust,no_run
//! use placegen_core::{Generator, PlacegenConfig};
//!
//! # fn example() -> Result<(), placegen_core::GeneratorError> {
//! let config = PlacegenConfig::default();
//! let manifest = config.manifest()?;
//! let report = Generator::new(&config.output_dir).generate(&manifest)?;
//! assert_eq!(report.total(), manifest.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod logging;
pub mod manifest;

pub use config::PlacegenConfig;
pub use error::{GeneratorError, GeneratorResult};
pub use format::DocumentFormat;
pub use generator::{GenerationReport, Generator};
pub use manifest::{DocumentDescriptor, Manifest, RawDescriptor};
