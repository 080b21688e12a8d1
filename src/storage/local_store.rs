use crate::models::ListingFile;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Filesystem access for the pipeline: scans the raw export directory,
/// loads the per-scrape JSON files and writes the final dataset.
pub struct LocalStore;

impl LocalStore {
    /// Lists the `.json` files in the raw directory. File names are sorted
    /// so that row order, and therefore the output, is reproducible.
    pub fn list_listing_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read raw listing directory: {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Parses one scraper export and returns its raw listing items.
    pub fn load_items(&self, path: &Path) -> Result<Vec<Value>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing file: {}", path.display()))?;

        let file: ListingFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listing file: {}", path.display()))?;

        Ok(file.items)
    }

    /// Writes the serialized dataset in one shot; nothing is written until
    /// the whole pipeline has succeeded.
    pub fn write_output(&self, path: &Path, json: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }

        fs::write(path, json)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;

        info!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}
