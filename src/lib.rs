//! hyperion_lookup library - interactive lookups over the student database
//!
//! Provides the command catalog, argument validation, query execution,
//! terminal rendering and JSON/XML export behind the interactive prompt.

pub mod catalog;
pub mod cli;
pub mod db;
pub mod executor;
pub mod export;
pub mod logging;
pub mod output;
pub mod repl;
pub mod validate;

#[cfg(test)]
pub mod test_utils;
