//! CLI module - argument parsing, prompts, table rendering, command dispatch

pub mod args;
pub mod commands;
pub mod helpers;
pub mod table;

pub use args::{Cli, Mode};
