//! CLI module for toolroute - command-line arguments.

pub mod commands;

pub use commands::Cli;
