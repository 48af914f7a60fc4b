//! PATH probing for required tools.
//!
//! `pip install --user` puts console scripts in `~/.local/bin`, which is
//! often missing from PATH in a fresh shell. The `EnvironmentProbe` adds
//! that directory to the lookup path so a tool installed moments ago can be
//! found and invoked by absolute path.
//!
//! # Example
//!
//! ```no_run
//! use apkbuild::requirements::probe::{resolve_tool_path, EnvironmentProbe};
//!
//! let probe = EnvironmentProbe::run();
//! if let Some(path) = resolve_tool_path("buildozer", &probe.full_path()) {
//!     println!("buildozer at {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// User-level script directories, relative to the home directory.
const USER_BIN_DIRS: &[&str] = &[".local/bin"];

/// Result of probing the environment for extra tool locations.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentProbe {
    /// Additional PATH entries not present in the system PATH.
    augmented_path: Vec<PathBuf>,
    /// The system PATH at probe time.
    system_path: Vec<PathBuf>,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

impl EnvironmentProbe {
    /// Probe using the real home directory and PATH.
    pub fn run() -> Self {
        let home = dirs::home_dir();
        Self::run_with(home.as_deref(), parse_system_path())
    }

    /// Probe with an explicit home directory and system PATH.
    pub fn run_with(home: Option<&Path>, system_path: Vec<PathBuf>) -> Self {
        let mut augmented_path = Vec::new();

        if let Some(home) = home {
            for sub in USER_BIN_DIRS {
                let dir = home.join(sub);
                if dir.is_dir() && !system_path.contains(&dir) && !augmented_path.contains(&dir) {
                    tracing::debug!("Adding {} to tool lookup path", dir.display());
                    augmented_path.push(dir);
                }
            }
        }

        Self {
            augmented_path,
            system_path,
        }
    }

    /// Get the additional PATH entries discovered by the probe.
    pub fn augmented_path(&self) -> &[PathBuf] {
        &self.augmented_path
    }

    /// System PATH followed by the augmented entries.
    ///
    /// Augmented entries go last so a tool already on PATH keeps priority.
    pub fn full_path(&self) -> Vec<PathBuf> {
        let mut result = self.system_path.clone();
        result.extend(self.augmented_path.iter().cloned());
        result
    }
}
