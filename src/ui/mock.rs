//! Recording UI for tests.
//!
//! ```
//! use apkbuild::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("build_type", "2");
//!
//! let prompt = Prompt {
//!     key: "build_type".to_string(),
//!     question: "Enter choice (1 or 2)".to_string(),
//!     default: Some("1".to_string()),
//! };
//! assert_eq!(ui.prompt(&prompt).unwrap(), "2");
//!
//! ui.success("Debug build completed");
//! assert!(ui.has_success("completed"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Records every call; prompts are answered from preset responses.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

fn any_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the prompt with `key` with `response`.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.responses.insert(key.to_string(), response.to_string());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner started, in order.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, needle: &str) -> bool {
        any_contains(&self.messages, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        any_contains(&self.successes, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        any_contains(&self.warnings, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        any_contains(&self.errors, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        any_contains(&self.hints, needle)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    /// Preset response, else the prompt's default, else empty.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());
        let answer = self
            .responses
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .unwrap_or_default();
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(SilentSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, _msg: &str) {}
}
