//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Portico;

/// Remove the generated bundles
pub fn run(portico: &Portico) -> Result<()> {
    if portico.public_dir.exists() {
        fs::remove_dir_all(&portico.public_dir)?;
        tracing::info!("Deleted: {:?}", portico.public_dir);
    }

    Ok(())
}
