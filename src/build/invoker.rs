//! Build invocation and result reporting.
//!
//! A run moves through `AwaitingChoice -> Building -> Succeeded | Failed`.
//! Each transition happens once; there are no retries.

use std::path::PathBuf;

use crate::build::artifact::{find_artifact, Artifact};
use crate::build::mode::BuildMode;
use crate::config::BuildSettings;
use crate::error::{ApkBuildError, Result};
use crate::host::HostContext;
use crate::shell::CommandSpec;
use crate::ui::{guidance, Prompt, UserInterface};

/// Prompt key for the build mode menu.
pub const BUILD_TYPE_PROMPT: &str = "build_type";

/// Where a run currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState {
    /// Waiting for the mode answer.
    AwaitingChoice,
    /// The build tool is running.
    Building(BuildMode),
    /// The build tool exited zero.
    Succeeded {
        mode: BuildMode,
        /// Discovered package; always `None` for release builds.
        artifact: Option<Artifact>,
    },
    /// The build tool exited non-zero.
    Failed {
        mode: BuildMode,
        exit_code: Option<i32>,
    },
}

impl BuildState {
    /// Whether the run has reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildState::Succeeded { .. } | BuildState::Failed { .. })
    }
}

/// Drives one build from mode selection to report.
#[derive(Debug)]
pub struct BuildInvoker<'s> {
    settings: &'s BuildSettings,
    buildozer: PathBuf,
    state: BuildState,
}

impl<'s> BuildInvoker<'s> {
    /// Create an invoker that will run `buildozer` from the given path.
    pub fn new(settings: &'s BuildSettings, buildozer: PathBuf) -> Self {
        Self {
            settings,
            buildozer,
            state: BuildState::AwaitingChoice,
        }
    }

    /// Current state.
    pub fn state(&self) -> &BuildState {
        &self.state
    }

    /// The build tool invocation for a mode.
    pub fn command_for(&self, mode: BuildMode) -> CommandSpec {
        CommandSpec::new(&self.buildozer)
            .args([self.settings.target.as_str(), mode.as_arg()])
            .cwd(&self.settings.project_root)
    }

    /// Resolve the build mode: the preset if given, otherwise ask.
    pub fn choose(
        &mut self,
        preset: Option<BuildMode>,
        ui: &mut dyn UserInterface,
    ) -> Result<BuildMode> {
        let mode = match preset {
            Some(mode) => mode,
            None => {
                for line in guidance::MODE_MENU {
                    ui.message(line);
                }
                let prompt = Prompt {
                    key: BUILD_TYPE_PROMPT.to_string(),
                    question: "Enter choice (1 or 2)".to_string(),
                    default: Some(BuildMode::Debug.choice().to_string()),
                };
                let answer = ui.prompt(&prompt)?;
                BuildMode::from_choice(&answer)
            }
        };

        tracing::debug!("Build mode: {}", mode);
        self.state = BuildState::Building(mode);
        Ok(mode)
    }

    /// Run the build tool for the chosen mode and report the outcome.
    ///
    /// Must be called after [`choose`](Self::choose).
    pub fn build(&mut self, ctx: &HostContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
        let BuildState::Building(mode) = self.state else {
            return Err(anyhow::anyhow!("build started in state {:?}", self.state).into());
        };

        let spec = self.command_for(mode);
        ui.show_header(&format!("{} build: {}", mode, spec.display()));
        tracing::info!("Starting {} build in {}", mode.as_arg(), self.settings.root().display());

        let result = (ctx.run)(&spec)?;

        if !result.success {
            self.state = BuildState::Failed {
                mode,
                exit_code: result.exit_code,
            };
            self.report_failure(mode, ui);
            return Err(ApkBuildError::BuildFailed {
                mode,
                code: result.exit_code,
            });
        }

        let artifact = match mode {
            BuildMode::Debug => find_artifact(
                &self.settings.artifact_dir_path(),
                &self.settings.artifact_extension,
            )?,
            BuildMode::Release => None,
        };

        self.report_success(mode, artifact.as_ref(), ui);
        self.state = BuildState::Succeeded { mode, artifact };
        Ok(())
    }

    fn report_success(
        &self,
        mode: BuildMode,
        artifact: Option<&Artifact>,
        ui: &mut dyn UserInterface,
    ) {
        ui.success(&format!("{} build completed", mode));

        match (mode, artifact) {
            (BuildMode::Debug, Some(artifact)) => {
                ui.message(&format!("APK: {}", artifact.path.display()));
                ui.message(&format!(
                    "Size: {} ({} bytes)",
                    artifact.human_size(),
                    artifact.size_bytes
                ));
                for line in guidance::debug_install_instructions(&self.settings.artifact_dir_path())
                {
                    ui.message(&line);
                }
            }
            (BuildMode::Debug, None) => {
                ui.warning(&format!(
                    "No .{} file found in {}",
                    self.settings.artifact_extension,
                    self.settings.artifact_dir_path().display()
                ));
            }
            (BuildMode::Release, _) => {
                for line in guidance::RELEASE_SIGNING_REMINDER {
                    ui.warning(line);
                }
            }
        }
    }

    fn report_failure(&self, mode: BuildMode, ui: &mut dyn UserInterface) {
        ui.error(&format!("{} build failed", mode));
        let checklist = match mode {
            BuildMode::Debug => guidance::DEBUG_TROUBLESHOOTING,
            BuildMode::Release => guidance::RELEASE_TROUBLESHOOTING,
        };
        ui.message("Troubleshooting:");
        for (i, item) in checklist.iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, item));
        }
    }
}
