//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for turning parsed arguments into a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::BuildSettings;
use crate::error::Result;
use crate::host::HostContext;
use crate::ui::UserInterface;

use super::build::BuildCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Errors
    ///
    /// The first fatal step's error. Every error ends the process with
    /// exit status 1.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Builds and runs the command for a parsed command line.
pub struct CommandDispatcher<'c> {
    project_root: PathBuf,
    ctx: &'c HostContext<'c>,
}

impl<'c> CommandDispatcher<'c> {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, ctx: &'c HostContext<'c>) -> Self {
        Self { project_root, ctx }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the build.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        let settings = BuildSettings::for_project(&self.project_root);
        let cmd = BuildCommand::new(settings, cli.mode, self.ctx);
        cmd.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_creation() {
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &|_| None,
            run: &|_| unreachable!(),
        };
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), &ctx);
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn dispatch_on_unsupported_host_fails_before_lookup() {
        use crate::ui::MockUI;
        use clap::Parser;

        let ctx = HostContext {
            os: "macos".to_string(),
            locate: &|_| panic!("no lookup expected"),
            run: &|_| panic!("no command expected"),
        };
        let cli = Cli::try_parse_from(["apkbuild"]).unwrap();
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), &ctx);
        let mut ui = MockUI::new();

        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}
