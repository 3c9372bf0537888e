//! memetts CLI library
//!
//! Command-line front end for memetts: loads a clip dictionary from an
//! audio directory and splits text into clip and speech tokens, either in
//! batch or as a live stream.

pub mod commands;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod unit;

pub use error::{CliError, CliResult};
