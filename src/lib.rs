//! apkbuild - Build Android packages for Kivy projects with buildozer.
//!
//! apkbuild checks that the host can build at all, installs buildozer when
//! it is missing, generates a launcher icon, asks for a debug or release
//! build, runs `buildozer android <mode>` and reports the result.
//!
//! # Modules
//!
//! - [`build`] - Build modes, invocation and artifact discovery
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Fixed project layout conventions
//! - [`error`] - Error types and result aliases
//! - [`host`] - Host OS, tool lookup and command execution as inputs
//! - [`icon`] - Launcher icon generation
//! - [`requirements`] - Platform and tool checks, build tool install
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use apkbuild::build::BuildMode;
//!
//! assert_eq!(BuildMode::from_choice("2"), BuildMode::Release);
//! assert_eq!(BuildMode::from_choice("oops"), BuildMode::Debug);
//! assert_eq!(BuildMode::Release.as_arg(), "release");
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod icon;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{ApkBuildError, Result};
