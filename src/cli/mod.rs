//! CLI module - argument parsing, command driver, table rendering

pub mod args;
pub mod search;
pub mod table;

pub use args::Cli;
