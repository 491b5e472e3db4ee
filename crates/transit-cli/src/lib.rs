//! Transit CLI library.
//!
//! Terminal styling, logging setup and output formatting shared by the
//! `transit-cli` subcommands.

pub mod logging;
pub mod output;
pub mod terminal;
