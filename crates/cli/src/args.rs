// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version = crate::VERSION,
    about = "Readability and lexical statistics for English text",
    long_about = "Counts words, sentences, letters and syllables, then derives \
                  Flesch-Kincaid, Gunning-Fog, Coleman-Liau, SMOG, ARI and Dale-Chall scores.\n\
                  Reads standard input when no path is given (or for `-`)."
)]
pub struct Args {
    /// Files to analyze
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Also print the number of words per syllable count
    #[arg(long, help_heading = "Output")]
    pub histogram: bool,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisArgs {
    /// Familiar-word list for Dale-Chall (one word per line, `#` comments allowed)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Analysis")]
    pub familiar_words: Option<PathBuf>,

    /// Number of inputs analyzed in parallel (default: CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(usize), help_heading = "Analysis")]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorArgs {
    /// Stop at the first input that fails
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Behavior")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Behavior")]
    pub quiet: bool,
}
