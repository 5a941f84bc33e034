use std::path::Path;

use anyhow::Context;
use tracing::{error, info, warn};

use placegen_core::config::CONFIG_FILE_NAME;
use placegen_core::{Generator, PlacegenConfig, logging};

fn main() -> anyhow::Result<()> {
    // Keep the file writer alive until the run ends.
    let _guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            logging::init_console_logging()?;
            warn!("File logging unavailable, using console only: {e:#}");
            None
        }
    };

    info!("placegen v{}", env!("CARGO_PKG_VERSION"));

    let config = PlacegenConfig::load_from_path(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load {CONFIG_FILE_NAME}"))?;
    let manifest = config
        .manifest()
        .inspect_err(|e| error!("Invalid manifest: {e}"))?;

    let generator = Generator::new(&config.output_dir);
    info!(
        "Writing {} documents to {}",
        manifest.len(),
        generator.output_dir().display()
    );
    generator
        .generate(&manifest)
        .inspect_err(|e| error!("Generation aborted: {e}"))?;

    Ok(())
}
