//! External command execution and host detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, CommandSpec};
pub use platform::{host_os, is_ci, is_linux_like};
