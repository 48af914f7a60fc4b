//! Preflight checks for the platform and required tools.
//!
//! Checks run in a fixed order and stop at the first failure:
//! platform, then Python, then Java. Nothing is retried.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ApkBuildError, Result};
use crate::host::HostContext;
use crate::requirements::registry::{Tool, JAVA, PYTHON};
use crate::requirements::status::ToolStatus;
use crate::shell::{is_linux_like, CommandSpec};
use crate::ui::{guidance, UserInterface};

/// Refuse to continue unless the host identifies as Linux.
///
/// On failure the UI receives the list of environments that can run the
/// build instead.
pub fn check_platform(os: &str, ui: &mut dyn UserInterface) -> Result<()> {
    if is_linux_like(os) {
        tracing::debug!("Host OS '{}' accepted", os);
        return Ok(());
    }

    ui.error(&format!(
        "This build must run on Linux (detected '{}').",
        os
    ));
    ui.message(guidance::PLATFORM_ALTERNATIVES_TITLE);
    for (i, alternative) in guidance::PLATFORM_ALTERNATIVES.iter().enumerate() {
        ui.message(&format!("  {}. {}", i + 1, alternative));
    }

    Err(ApkBuildError::UnsupportedPlatform { os: os.to_string() })
}

static QUOTED_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version "(\d+(?:[._]\d+)*)"#).unwrap());

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").unwrap());

/// Pull a version number out of a tool's version banner.
///
/// A quoted `version "..."` wins over the first number, so the release
/// date in `openjdk version "17" 2021-09-14` is never picked. Also handles
/// `Python 3.11.4` and plain `1.5.0`.
pub fn extract_version(output: &str) -> Option<String> {
    if let Some(caps) = QUOTED_VERSION_REGEX.captures(output) {
        return Some(caps[1].to_string());
    }
    VERSION_REGEX.find(output).map(|m| m.as_str().to_string())
}

/// Locate the first executable candidate of a tool.
pub fn locate_tool(tool: &Tool, ctx: &HostContext<'_>) -> Option<PathBuf> {
    tool.candidates
        .iter()
        .find_map(|candidate| (ctx.locate)(candidate))
}

/// Ask a located tool for its version.
///
/// Tools print version banners on stdout (python, buildozer) or stderr
/// (java), so both streams are searched. A failing version command is not
/// an error: the tool exists, its version is just unknown.
pub fn detect_version(tool: &Tool, path: &Path, ctx: &HostContext<'_>) -> Option<String> {
    let spec = CommandSpec::new(path).args(tool.version_args.iter().copied()).captured();
    match (ctx.run)(&spec) {
        Ok(result) => extract_version(&result.combined_output()),
        Err(e) => {
            tracing::debug!("Version query for {} failed: {}", tool.name, e);
            None
        }
    }
}

/// Look up a tool and its version.
pub fn check_tool(tool: &Tool, ctx: &HostContext<'_>) -> ToolStatus {
    match locate_tool(tool, ctx) {
        Some(path) => {
            let version = detect_version(tool, &path, ctx);
            ToolStatus::Found { path, version }
        }
        None => ToolStatus::Missing,
    }
}

/// Report a found tool to the user.
pub fn report_found(tool: &Tool, status: &ToolStatus, ui: &mut dyn UserInterface) {
    if let ToolStatus::Found { path, version } = status {
        let version = version.as_deref().unwrap_or("unknown version");
        ui.success(&format!("{} {} ({})", tool.name, version, path.display()));
    }
}

/// Check a tool whose absence ends the run.
pub fn require_tool(
    tool: &Tool,
    ctx: &HostContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PathBuf> {
    let status = check_tool(tool, ctx);
    match &status {
        ToolStatus::Found { path, .. } => {
            report_found(tool, &status, ui);
            Ok(path.clone())
        }
        ToolStatus::Missing => {
            tracing::debug!("{} missing (tried {:?})", tool.name, tool.candidates);
            Err(ApkBuildError::RequirementMissing {
                requirement: tool.name.to_string(),
                install_command: tool.install_command.to_string(),
            })
        }
    }
}

/// Run the platform gate and every required-tool check.
///
/// Returns the Python interpreter, which later installs buildozer. Java is
/// only needed by buildozer itself, so its path is not kept.
pub fn run_preflight(ctx: &HostContext<'_>, ui: &mut dyn UserInterface) -> Result<PathBuf> {
    check_platform(&ctx.os, ui)?;

    let python = require_tool(&PYTHON, ctx, ui)?;
    require_tool(&JAVA, ctx, ui)?;

    Ok(python)
}
