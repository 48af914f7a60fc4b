//! Error types for apkbuild operations.
//!
//! This module defines [`ApkBuildError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is terminal for the run; `main` maps any error to exit code 1
//! - Use `ApkBuildError::Other` (via `anyhow`) for unexpected errors
//! - Messages name the remediation where one exists

use thiserror::Error;

use crate::build::BuildMode;

/// Core error type for apkbuild operations.
#[derive(Debug, Error)]
pub enum ApkBuildError {
    /// The host is not a Linux environment.
    #[error("Unsupported platform '{os}': Android builds require Linux")]
    UnsupportedPlatform { os: String },

    /// A required tool is not on PATH and is not installed automatically.
    #[error("{requirement} not found. Install it with: {install_command}")]
    RequirementMissing {
        requirement: String,
        install_command: String,
    },

    /// The package manager failed to install a tool.
    #[error("Failed to install {package} ({})", exit_status(.code))]
    InstallFailed { package: String, code: Option<i32> },

    /// The build tool exited non-zero.
    #[error("{mode} build failed ({})", exit_status(.code))]
    BuildFailed { mode: BuildMode, code: Option<i32> },

    /// An external command could not be spawned.
    #[error("Command failed to start: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for apkbuild operations.
pub type Result<T> = std::result::Result<T, ApkBuildError>;

/// Describe how a child process ended; `None` means no exit code was set.
pub fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "killed by signal".to_string(),
    }
}
