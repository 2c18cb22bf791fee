//! # Skye Commands
//!
//! Discord command implementations using the Poise framework for Skye Bot.
//!
//! Commands are grouped into categories (the bot's "cogs"): `Misc` holds the
//! interactive user card and the server card, `Bot Info` the statistics,
//! uptime and source lookup, `Fun` the small games, and `Meta` help and
//! command registration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod botinfo;
pub mod embed;
pub mod framework;
pub mod fun;
pub mod help;
pub mod info;
pub mod server;
pub mod source;
pub mod stats;
pub mod uptime;

pub use embed::EmbedSpec;
pub use framework::*;
pub use stats::ProcessStats;
