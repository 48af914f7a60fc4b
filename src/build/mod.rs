//! Build mode selection, build tool invocation and artifact reporting.
//!
//! # Modules
//!
//! - [`mode`] - Debug/release selection
//! - [`invoker`] - The build state machine
//! - [`artifact`] - Locating the produced package

pub mod artifact;
pub mod invoker;
pub mod mode;

pub use artifact::{find_artifact, format_size, Artifact};
pub use invoker::{BuildInvoker, BuildState, BUILD_TYPE_PROMPT};
pub use mode::BuildMode;
