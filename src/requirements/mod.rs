//! Requirement detection and installation.
//!
//! This module checks whether the external tools an Android build needs
//! are installed and installs the build tool when it is missing.
//!
//! # Modules
//!
//! - [`checker`] - Platform gate and per-tool checks
//! - [`installer`] - One-shot pip install of the build tool
//! - [`probe`] - PATH resolution, including the user-level pip script directory
//! - [`registry`] - Tool definitions and install commands
//! - [`status`] - Tool status types

pub mod checker;
pub mod installer;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::run_preflight;
pub use installer::ensure_buildozer;
pub use status::{ToolStatus, Toolchain};
