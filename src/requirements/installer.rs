//! Installation of the build tool when it is missing.
//!
//! Only buildozer is installed automatically, through the Python
//! interpreter found by preflight (`python -m pip install --user`). One
//! attempt is made; a failing installer ends the run.

use std::path::{Path, PathBuf};

use crate::config::BuildSettings;
use crate::error::{ApkBuildError, Result};
use crate::host::HostContext;
use crate::requirements::checker::{check_tool, report_found};
use crate::requirements::registry::BUILDOZER;
use crate::requirements::status::ToolStatus;
use crate::shell::CommandSpec;
use crate::ui::UserInterface;

/// The pip invocation that installs `package` for the current user.
pub fn pip_install_command(python: &Path, package: &str) -> CommandSpec {
    CommandSpec::new(python).args(["-m", "pip", "install", "--user", package])
}

/// Make sure buildozer is available, installing it if needed.
///
/// Returns the path to invoke. When the tool is already present this is a
/// pure lookup. After a successful install the tool is looked up again;
/// if it is still not found the bare executable name is returned and the
/// user is warned about PATH.
pub fn ensure_buildozer(
    python: &Path,
    settings: &BuildSettings,
    ctx: &HostContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PathBuf> {
    let status = check_tool(&BUILDOZER, ctx);
    if status.is_found() {
        report_found(&BUILDOZER, &status, ui);
        return Ok(status.path().cloned().unwrap_or_default());
    }

    ui.warning(&format!(
        "{} not found. Installing {}...",
        BUILDOZER.name, settings.pip_package
    ));

    let mut spec = pip_install_command(python, &settings.pip_package);
    if !ui.output_mode().shows_command_output() {
        spec = spec.captured();
    }

    let mut spinner = ui.start_spinner(&format!("Installing {}", settings.pip_package));
    let result = match (ctx.run)(&spec) {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_error(&format!("Could not run {}", spec.display()));
            return Err(e);
        }
    };

    if !result.success {
        spinner.finish_error(&format!("Failed to install {}", settings.pip_package));
        if !result.stderr.trim().is_empty() {
            ui.message(result.stderr.trim_end());
        }
        ui.show_hint(&format!("Install it manually with: {}", BUILDOZER.install_command));
        return Err(ApkBuildError::InstallFailed {
            package: settings.pip_package.clone(),
            code: result.exit_code,
        });
    }

    spinner.finish_success(&format!("Installed {}", settings.pip_package));
    tracing::info!("Installed {} in {:?}", settings.pip_package, result.duration);

    let status = check_tool(&BUILDOZER, ctx);
    match status {
        ToolStatus::Found { ref path, .. } => {
            report_found(&BUILDOZER, &status, ui);
            Ok(path.clone())
        }
        ToolStatus::Missing => {
            ui.warning(&format!(
                "{} was installed but is not on PATH. Add ~/.local/bin to PATH if the build fails to start.",
                BUILDOZER.name
            ));
            Ok(PathBuf::from(BUILDOZER.primary_executable()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandResult;
    use crate::ui::MockUI;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    fn ok() -> Result<CommandResult> {
        Ok(CommandResult::success(
            "1.5.0".to_string(),
            String::new(),
            Duration::ZERO,
        ))
    }

    fn failed(code: i32) -> Result<CommandResult> {
        Ok(CommandResult::failure(
            Some(code),
            String::new(),
            "ERROR: No matching distribution found".to_string(),
            Duration::ZERO,
        ))
    }

    fn is_pip(spec: &CommandSpec) -> bool {
        spec.args.iter().any(|a| a == "pip")
    }

    #[test]
    fn pip_command_targets_user_site() {
        let spec = pip_install_command(Path::new("/usr/bin/python3"), "buildozer");
        assert_eq!(spec.display(), "python3 -m pip install --user buildozer");
    }

    #[test]
    fn present_buildozer_skips_install() {
        let commands = RefCell::new(Vec::new());
        let run = |spec: &CommandSpec| {
            commands.borrow_mut().push(spec.display());
            ok()
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &|tool| Some(PathBuf::from("/usr/local/bin").join(tool)),
            run: &run,
        };
        let mut ui = MockUI::new();

        let path = ensure_buildozer(
            Path::new("/usr/bin/python3"),
            &BuildSettings::default(),
            &ctx,
            &mut ui,
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("/usr/local/bin/buildozer"));
        assert_eq!(commands.borrow().as_slice(), ["buildozer --version"]);
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn missing_buildozer_is_installed_then_located() {
        let installed = Cell::new(false);
        let locate = |tool: &str| {
            (tool == "buildozer" && installed.get())
                .then(|| PathBuf::from("/home/dev/.local/bin/buildozer"))
        };
        let run = |spec: &CommandSpec| {
            if is_pip(spec) {
                installed.set(true);
            }
            ok()
        };
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &locate,
            run: &run,
        };
        let mut ui = MockUI::new();

        let path = ensure_buildozer(
            Path::new("/usr/bin/python3"),
            &BuildSettings::default(),
            &ctx,
            &mut ui,
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("/home/dev/.local/bin/buildozer"));
        assert!(ui.has_warning("Installing buildozer"));
        assert_eq!(ui.spinners(), ["Installing buildozer"]);
    }

    #[test]
    fn failed_install_is_fatal() {
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &|_| None,
            run: &|spec| if is_pip(spec) { failed(1) } else { ok() },
        };
        let mut ui = MockUI::new();

        let err = ensure_buildozer(
            Path::new("/usr/bin/python3"),
            &BuildSettings::default(),
            &ctx,
            &mut ui,
        )
        .unwrap_err();

        match err {
            ApkBuildError::InstallFailed { package, code } => {
                assert_eq!(package, "buildozer");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected InstallFailed, got {other:?}"),
        }
        assert!(ui.has_message("No matching distribution"));
        assert!(ui.has_hint("pip3 install --user buildozer"));
    }

    #[test]
    fn installed_but_unlocatable_falls_back_to_name() {
        let ctx = HostContext {
            os: "linux-gnu".to_string(),
            locate: &|_| None,
            run: &|_| ok(),
        };
        let mut ui = MockUI::new();

        let path = ensure_buildozer(
            Path::new("/usr/bin/python3"),
            &BuildSettings::default(),
            &ctx,
            &mut ui,
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("buildozer"));
        assert!(ui.has_warning("not on PATH"));
    }
}
