//! Launcher icon generation.
//!
//! buildozer projects reference `icon.png`; when the file is missing the
//! project's icon script is run to create it. The icon is cosmetic, so
//! every failure here is a warning.

use std::path::Path;

use crate::config::BuildSettings;
use crate::error::exit_status;
use crate::host::HostContext;
use crate::shell::CommandSpec;
use crate::ui::UserInterface;

/// What the icon step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// The icon file was already there.
    Present,
    /// The script ran and produced the icon.
    Generated,
    /// The icon is still missing; the reason was shown as a warning.
    Skipped { reason: String },
}

/// Generate the icon with `python <script>` if it does not exist.
pub fn ensure_icon(
    python: &Path,
    settings: &BuildSettings,
    ctx: &HostContext<'_>,
    ui: &mut dyn UserInterface,
) -> IconOutcome {
    let icon = settings.icon_path();
    if icon.is_file() {
        tracing::debug!("Icon present at {}", icon.display());
        return IconOutcome::Present;
    }

    let script = settings.icon_script_path();
    if !script.is_file() {
        return skip(
            ui,
            format!(
                "{} not found and no {} to generate it",
                settings.icon_file, settings.icon_script
            ),
        );
    }

    ui.message(&format!("Generating {}...", settings.icon_file));
    let spec = CommandSpec::new(python)
        .args([settings.icon_script.as_str()])
        .cwd(settings.root());

    match (ctx.run)(&spec) {
        Ok(result) if result.success && icon.is_file() => {
            ui.success(&format!("Created {}", settings.icon_file));
            IconOutcome::Generated
        }
        Ok(result) if result.success => skip(
            ui,
            format!(
                "{} finished but {} was not created",
                settings.icon_script, settings.icon_file
            ),
        ),
        Ok(result) => skip(
            ui,
            format!(
                "{} failed ({})",
                settings.icon_script,
                exit_status(&result.exit_code)
            ),
        ),
        Err(e) => skip(ui, e.to_string()),
    }
}

fn skip(ui: &mut dyn UserInterface, reason: String) -> IconOutcome {
    ui.warning(&format!("Continuing without an icon: {}", reason));
    IconOutcome::Skipped { reason }
}
