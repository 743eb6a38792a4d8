// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze every configured input and print the reports.
///
/// Per-input failures are written to stderr and reported through the returned flag,
/// which is `true` when at least one input failed.
///
/// # Errors
///
/// Returns [`error::AppError::Engine`] when the run cannot start or a strict run hits a
/// failing input, and an output error if the reports cannot be written.
pub fn run(config: &Config) -> Result<bool> {
    let result = text_stats_engine::run(config)?;

    for (name, err) in &result.errors {
        eprintln!("Error processing {name}: {err}");
    }

    presentation::print_results(&result.reports, config)?;
    Ok(result.has_errors())
}
