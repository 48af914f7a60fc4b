//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting failures.

pub mod build;
pub mod dispatcher;

pub use build::BuildCommand;
pub use dispatcher::{Command, CommandDispatcher};
