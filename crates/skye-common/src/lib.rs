//! # Skye Common
//!
//! Shared error types, formatting helpers, and logging setup for Skye Bot.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the Skye Bot workspace: the workspace-wide error type, the display
//! formatters every embed goes through, link/emoji constants, and the
//! tracing subscriber setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod error;
pub mod format;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SkyeError};
pub use format::*;
pub use logging::{init_logging, LoggingConfig};
