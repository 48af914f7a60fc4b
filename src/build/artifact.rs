//! Discovery of the package produced by a debug build.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A built package file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path of the package.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl Artifact {
    /// Size formatted for display.
    pub fn human_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Find the first file in `dir` with the given extension.
///
/// Files are ordered by name, the way a shell glob orders `bin/*.apk`.
/// A missing directory yields `None` rather than an error.
pub fn find_artifact(dir: &Path, extension: &str) -> Result<Option<Artifact>> {
    if !dir.is_dir() {
        tracing::debug!("Artifact directory {} does not exist", dir.display());
        return Ok(None);
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    candidates.sort();

    let Some(path) = candidates.into_iter().next() else {
        return Ok(None);
    };

    let size_bytes = fs::metadata(&path)?.len();
    Ok(Some(Artifact { path, size_bytes }))
}

/// Format a byte count with binary units (`512 B`, `1.5 KB`, `23.4 MB`).
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}
