//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{ApkBuildError, Result};

use super::Prompt;

/// Convert dialoguer errors to ApkBuildError.
fn map_dialoguer_err(e: dialoguer::Error) -> ApkBuildError {
    ApkBuildError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Read one line of input for a prompt.
///
/// Any text is accepted; interpreting it is the caller's job.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let answer = match &prompt.default {
        Some(default) => input.default(default.clone()).interact_text_on(term),
        None => input.interact_text_on(term),
    }
    .map_err(map_dialoguer_err)?;

    Ok(answer)
}
