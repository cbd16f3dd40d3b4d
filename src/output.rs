// src/output.rs
// =============================================================================
// Writes the collected names to disk.
//
// Format: one name per line, ascending lexicographic order, every line
// terminated by '\n', UTF-8. An existing file is overwritten.
//
// A write failure is fatal for the run: there is nowhere else to put the
// results, so the error goes back to main with the path attached.
// =============================================================================

use crate::collect::CollectedNames;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `collected_names_<version>.txt` in the working directory
pub fn default_output_path(version: &str) -> PathBuf {
    PathBuf::from(format!("collected_names_{}.txt", version))
}

pub fn write_names(path: &Path, names: &CollectedNames) -> Result<()> {
    // Make sure the target directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    // File::create truncates, so each run overwrites the previous output
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    // One name per line, already in sorted order
    for name in names.sorted() {
        writeln!(writer, "{}", name)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}
