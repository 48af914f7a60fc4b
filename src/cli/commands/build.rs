//! The build command.
//!
//! Runs the whole flow once: platform and tool checks, build tool install,
//! icon generation, mode selection, build, report. The first fatal step
//! ends the run.

use crate::build::{BuildInvoker, BuildMode};
use crate::config::BuildSettings;
use crate::error::Result;
use crate::host::HostContext;
use crate::icon::ensure_icon;
use crate::requirements::{ensure_buildozer, run_preflight, Toolchain};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Build an APK for the project.
pub struct BuildCommand<'c> {
    settings: BuildSettings,
    preset_mode: Option<BuildMode>,
    ctx: &'c HostContext<'c>,
}

impl<'c> BuildCommand<'c> {
    /// Create the command. `preset_mode` skips the menu when set.
    pub fn new(
        settings: BuildSettings,
        preset_mode: Option<BuildMode>,
        ctx: &'c HostContext<'c>,
    ) -> Self {
        Self {
            settings,
            preset_mode,
            ctx,
        }
    }

    /// Check the host and collect every tool the build invokes.
    fn prepare(&self, ui: &mut dyn UserInterface) -> Result<Toolchain> {
        let python = run_preflight(self.ctx, ui)?;
        let buildozer = ensure_buildozer(&python, &self.settings, self.ctx, ui)?;

        Ok(Toolchain { python, buildozer })
    }
}

impl Command for BuildCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Android APK build");
        tracing::debug!("Project root: {}", self.settings.root().display());

        let toolchain = self.prepare(ui)?;
        tracing::debug!("Toolchain: {:?}", toolchain);

        ensure_icon(&toolchain.python, &self.settings, self.ctx, ui);

        let mut invoker = BuildInvoker::new(&self.settings, toolchain.buildozer);
        invoker.choose(self.preset_mode, ui)?;
        invoker.build(self.ctx, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BUILD_TYPE_PROMPT;
    use crate::error::ApkBuildError;
    use crate::shell::{CommandResult, CommandSpec};
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn exit_with(code: i32) -> Result<CommandResult> {
        let result = if code == 0 {
            CommandResult::success(String::new(), String::new(), Duration::ZERO)
        } else {
            CommandResult::failure(Some(code), String::new(), String::new(), Duration::ZERO)
        };
        Ok(result)
    }

    /// A project directory that already has its icon.
    fn project() -> (TempDir, BuildSettings) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("icon.png"), b"png").unwrap();
        let settings = BuildSettings::for_project(temp.path());
        (temp, settings)
    }

    fn find_in_usr_bin(tools: &'static [&'static str]) -> impl Fn(&str) -> Option<PathBuf> {
        move |name: &str| {
            tools
                .iter()
                .any(|tool| *tool == name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }
    }

    fn program_name(spec: &CommandSpec) -> String {
        PathBuf::from(&spec.program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn unsupported_platform_stops_before_any_lookup() {
        let (_temp, settings) = project();
        let lookups = RefCell::new(0);
        let locate = |_: &str| {
            *lookups.borrow_mut() += 1;
            None
        };
        let run = |_: &CommandSpec| exit_with(0);
        let ctx = HostContext {
            os: "windows".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();

        let err = BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, ApkBuildError::UnsupportedPlatform { .. }));
        assert_eq!(*lookups.borrow(), 0);
        assert!(ui.has_message("WSL2"));
    }

    #[test]
    fn missing_java_reports_install_command_without_installing() {
        let (_temp, settings) = project();
        let locate = find_in_usr_bin(&["python3"]);
        let commands = RefCell::new(Vec::new());
        let run = |spec: &CommandSpec| {
            commands.borrow_mut().push(spec.args.clone());
            exit_with(0)
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();

        let err = BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap_err();

        assert!(err.to_string().contains("sudo apt install -y openjdk-17-jdk"));
        assert!(commands
            .borrow()
            .iter()
            .all(|args| !args.contains(&"pip".to_string())));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn failed_install_never_reaches_prompt() {
        let (_temp, settings) = project();
        let locate = find_in_usr_bin(&["python3", "java"]);
        let run = |spec: &CommandSpec| {
            if spec.args.contains(&"pip".to_string()) {
                exit_with(1)
            } else {
                exit_with(0)
            }
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();

        let err = BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, ApkBuildError::InstallFailed { .. }));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn successful_install_reaches_prompt() {
        let (_temp, settings) = project();
        let installed = RefCell::new(false);
        let locate = |name: &str| match name {
            "python3" | "java" => Some(PathBuf::from("/usr/bin").join(name)),
            "buildozer" if *installed.borrow() => {
                Some(PathBuf::from("/home/u/.local/bin/buildozer"))
            }
            _ => None,
        };
        let run = |spec: &CommandSpec| {
            if spec.args.contains(&"pip".to_string()) {
                *installed.borrow_mut() = true;
            }
            exit_with(0)
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();
        ui.set_prompt_response(BUILD_TYPE_PROMPT, "2");

        BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.errors().is_empty());
        assert_eq!(ui.prompts_shown(), [BUILD_TYPE_PROMPT]);
    }

    #[test]
    fn choice_two_builds_release_without_artifact_lookup() {
        let (temp, settings) = project();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::write(temp.path().join("bin/app-debug.apk"), b"apk").unwrap();

        let locate = find_in_usr_bin(&["python3", "java", "buildozer"]);
        let builds = RefCell::new(Vec::new());
        let run = |spec: &CommandSpec| {
            let is_build = spec.args.first().map(String::as_str) == Some("android");
            if program_name(spec) == "buildozer" && is_build {
                builds.borrow_mut().push(spec.args.clone());
            }
            exit_with(0)
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();
        ui.set_prompt_response(BUILD_TYPE_PROMPT, "2");

        BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            *builds.borrow(),
            vec![vec!["android".to_string(), "release".to_string()]]
        );
        assert!(!ui.has_message("app-debug.apk"));
        assert!(ui.has_warning("signed"));
    }

    #[test]
    fn debug_build_reports_first_artifact_and_size() {
        let (temp, settings) = project();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("a-debug.apk"), vec![0u8; 2048]).unwrap();
        fs::write(bin.join("b-debug.apk"), vec![0u8; 10]).unwrap();

        let locate = find_in_usr_bin(&["python3", "java", "buildozer"]);
        let run = |_: &CommandSpec| exit_with(0);
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();
        ui.set_prompt_response(BUILD_TYPE_PROMPT, "1");

        BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("a-debug.apk"));
        assert!(ui.has_message("Size: 2.0 KB (2048 bytes)"));
        assert!(!ui.has_message("b-debug.apk"));
    }

    #[test]
    fn failed_debug_build_shows_debug_checklist() {
        let (_temp, settings) = project();
        let locate = find_in_usr_bin(&["python3", "java", "buildozer"]);
        let run = |spec: &CommandSpec| {
            if spec.args.first().map(String::as_str) == Some("android") {
                exit_with(2)
            } else {
                exit_with(0)
            }
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();
        ui.set_prompt_response(BUILD_TYPE_PROMPT, "anything");

        let err = BuildCommand::new(settings, None, &ctx)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(
            err,
            ApkBuildError::BuildFailed {
                mode: BuildMode::Debug,
                code: Some(2)
            }
        ));
        assert!(ui.has_error("Debug build failed"));
        assert!(ui.has_message("buildozer -v android debug"));
        assert!(!ui.has_message("keystore"));
    }

    #[test]
    fn preset_mode_skips_menu() {
        let (_temp, settings) = project();
        let locate = find_in_usr_bin(&["python3", "java", "buildozer"]);
        let run = |_: &CommandSpec| exit_with(0);
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();

        BuildCommand::new(settings, Some(BuildMode::Release), &ctx)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert_eq!(ui.headers()[0], "Android APK build");
    }
}
