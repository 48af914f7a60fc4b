//! CLI argument definitions.
//!
//! Running `apkbuild` with no arguments asks for the build mode; every
//! flag is optional.

use clap::Parser;
use std::path::PathBuf;

use crate::build::BuildMode;

/// apkbuild - Build an Android APK for a Kivy project with buildozer.
#[derive(Debug, Parser)]
#[command(name = "apkbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build mode; skips the interactive menu
    #[arg(short, long, value_enum, env = "APKBUILD_MODE")]
    pub mode: Option<BuildMode>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "APKBUILD_PROJECT")]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
