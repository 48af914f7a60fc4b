//! Non-interactive UI for CI, redirected output and piped input.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, IsTerminal};

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "APKBUILD_PROMPT_";

/// Plain-text UI used whenever stdout is not a terminal.
///
/// A prompt is answered from, in order:
/// 1. the `APKBUILD_PROMPT_<KEY>` environment variable,
/// 2. one line of piped stdin (`printf '2\n' | apkbuild > build.log`),
/// 3. the prompt's default, when stdin is a terminal, at end of input, or
///    for an empty line.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Option<Box<dyn BufRead>>,
}

impl NonInteractiveUI {
    /// Read overrides from the environment and answers from piped stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        let stdin = std::io::stdin();
        let input = if stdin.is_terminal() {
            None
        } else {
            Some(Box::new(BufReader::new(stdin)) as Box<dyn BufRead>)
        };

        Self::with_sources(mode, env_overrides, input)
    }

    /// Use explicit overrides and input (for testing).
    pub fn with_sources(
        mode: OutputMode,
        env_overrides: HashMap<String, String>,
        input: Option<Box<dyn BufRead>>,
    ) -> Self {
        Self {
            mode,
            env_overrides,
            input,
        }
    }

    /// Next line of input, or `None` at end of input or without input.
    fn read_answer(&mut self) -> Result<Option<String>> {
        let Some(input) = self.input.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("Prompt input closed, using default");
            self.input = None;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());

        let answer = match self.env_overrides.get(&env_key) {
            Some(value) => Some(value.clone()),
            None => self.read_answer()?,
        };
        let answer = answer
            .or_else(|| prompt.default.clone())
            .unwrap_or_default();

        println!("{}: {}", prompt.question, answer);
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}...", message);
        }
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }
}

/// Spinner stand-in that prints only the outcome line.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
