//! # Skye Bot
//!
//! Multipurpose open source Discord bot.
//!
//! This is the main binary crate: it loads the configuration, sets up
//! logging and runs the Poise framework until shutdown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
