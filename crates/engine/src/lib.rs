// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::borrow::Cow;

pub mod config;
pub mod error;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{RunResult, TextReport};
use text_stats_core::FamiliarWords;

/// Run the analysis engine over every configured input.
///
/// Inputs are analyzed in parallel, each with its own reader and result; reports come
/// back in input order.
///
/// # Errors
///
/// Returns an error for setup failures (familiar-word list, thread pool) and, in
/// strict mode, for the first input that fails. Otherwise per-input failures are
/// collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    if config.threads == 0 {
        return Err(EngineError::Config("thread count must be at least 1".into()));
    }

    let familiar = familiar_words(config)?;
    let sources = config.sources();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let outcomes: Vec<(String, Result<TextReport>)> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let name = source.name();
                log::debug!("analyzing {name}");
                let outcome = processor::process_source(source, &familiar);
                (name, outcome)
            })
            .collect()
    });

    let mut result = RunResult::default();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(report) => {
                log::debug!(
                    "{name}: {} words, {} sentences",
                    report.result.words,
                    report.result.sentences
                );
                result.reports.push(report);
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                log::warn!("skipping {name}: {e}");
                result.errors.push((name, e));
            }
        }
    }

    Ok(result)
}

fn familiar_words(config: &Config) -> Result<Cow<'static, FamiliarWords>> {
    match &config.familiar_words {
        Some(path) => processor::load_familiar_words(path).map(Cow::Owned),
        None => Ok(Cow::Borrowed(FamiliarWords::builtin())),
    }
}
