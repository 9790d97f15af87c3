//! Clean the output directory

use anyhow::{Context, Result};
use std::fs;

use crate::Devlog;

/// Delete the output directory; a missing one is not an error
pub fn run(devlog: &Devlog) -> Result<()> {
    let output_dir = &devlog.paths.output_dir;
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to delete {:?}", output_dir))?;
        tracing::info!("Deleted: {:?}", output_dir);
    }

    Ok(())
}
