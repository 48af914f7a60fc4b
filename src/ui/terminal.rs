//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, BuildTheme, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt,
    SpinnerHandle, UserInterface,
};

/// UI for a person at a terminal: colors, spinners, line-edited prompt.
///
/// Results go to stdout; warnings and errors go to stderr so they survive
/// `apkbuild | tee build.log` style redirection of the result lines.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: BuildTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: BuildTheme::detect(),
            mode,
        }
    }

    fn line(term: &mut Term, text: &str) {
        // A closed terminal is not worth failing the build over.
        writeln!(term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        Self::line(&mut self.out, msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        Self::line(&mut self.out, &text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        Self::line(&mut self.err, &text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        Self::line(&mut self.err, &text);
    }

    fn show_hint(&mut self, hint: &str) {
        let text = format!("  {}", self.theme.hint.apply_to(hint));
        Self::line(&mut self.out, &text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.out)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        // Verbose streams pip output, which a spinner would draw over.
        if self.mode.shows_progress() && !self.mode.shows_command_output() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            let text = format!("\n{}\n", self.theme.format_header(title));
            Self::line(&mut self.out, &text);
        }
    }
}

/// Pick the terminal UI when a person can answer prompts, plain output otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn non_interactive_request_gets_plain_ui() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
