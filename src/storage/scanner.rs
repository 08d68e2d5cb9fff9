//! Note discovery
//!
//! Recursively walks a notes directory and collects the files whose
//! extension is in the configured set. Results are sorted so repeated
//! scans visit notes in the same order and produce identical reports.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// Finds note files under `dir`, matching extensions case-insensitively.
///
/// Unreadable subtrees are skipped rather than failing the scan; only a
/// missing or non-directory root is an error.
pub fn find_notes(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
