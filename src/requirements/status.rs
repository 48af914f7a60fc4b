//! Tool status types for preflight results.

use std::path::PathBuf;

/// The result of looking up a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool is on the lookup path.
    Found {
        /// Resolved executable path
        path: PathBuf,
        /// Version reported by the tool, if it could be parsed
        version: Option<String>,
    },

    /// Tool is not installed anywhere on the lookup path.
    Missing,
}

impl ToolStatus {
    /// Whether the tool was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ToolStatus::Found { .. })
    }

    /// Resolved path, if found.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ToolStatus::Found { path, .. } => Some(path),
            ToolStatus::Missing => None,
        }
    }
}

/// Paths of the tools a build needs, collected by preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Python interpreter.
    pub python: PathBuf,
    /// Build tool; a bare name when it could not be located after install.
    pub buildozer: PathBuf,
}
