//! Ambient host state as explicit inputs.
//!
//! Everything the build flow learns from the machine it runs on (OS
//! identifier, where tools live, what external commands do) goes through a
//! [`HostContext`], so the flow can be driven in tests without a real
//! Android toolchain.

use std::path::PathBuf;

use crate::error::Result;
use crate::requirements::probe::{resolve_tool_path, EnvironmentProbe};
use crate::shell::{execute, host_os, CommandResult, CommandSpec};

/// Mockable view of the host.
pub struct HostContext<'a> {
    /// OS identifier (`linux-gnu`, `macos`, ...).
    pub os: String,
    /// Locate an executable by name, returning its absolute path.
    pub locate: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Run an external command to completion.
    pub run: &'a dyn Fn(&CommandSpec) -> Result<CommandResult>,
}

impl std::fmt::Debug for HostContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext").field("os", &self.os).finish()
    }
}

fn locate_on_path(tool: &str) -> Option<PathBuf> {
    // Re-probed on every lookup so tools installed during the run are seen.
    resolve_tool_path(tool, &EnvironmentProbe::run().full_path())
}

fn run_command(spec: &CommandSpec) -> Result<CommandResult> {
    execute(spec)
}

/// Build the `HostContext` for the machine the process runs on.
pub fn system_context() -> HostContext<'static> {
    HostContext {
        os: host_os(),
        locate: &locate_on_path,
        run: &run_command,
    }
}
