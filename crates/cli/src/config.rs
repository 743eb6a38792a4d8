// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use text_stats_engine::config::{Config, ConfigBuilder};
use text_stats_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let threads = args.analysis.jobs.unwrap_or_else(num_cpus::get).max(1);
        let format: engine_options::OutputFormat = args.output.format.into();

        ConfigBuilder::default()
            .inputs(args.paths)
            .familiar_words(args.analysis.familiar_words)
            .threads(threads)
            .strict(args.behavior.strict)
            .format(format)
            .histogram(args.output.histogram)
            .build()
            .expect("Failed to build config")
    }
}

/// Log level from `-v`/`-q`; `RUST_LOG` can still override it.
#[must_use]
pub fn log_level(args: &Args) -> log::LevelFilter {
    if args.behavior.quiet {
        return log::LevelFilter::Error;
    }
    match args.behavior.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl
);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn args_map_onto_engine_config() {
        let args = Args::try_parse_from([
            "text_stats",
            "doc.txt",
            "--format",
            "csv",
            "--jobs",
            "4",
            "--strict",
            "--histogram",
        ])
        .unwrap();
        let config = Config::from(args);
        assert_eq!(config.inputs, vec![PathBuf::from("doc.txt")]);
        assert_eq!(config.format, engine_options::OutputFormat::Csv);
        assert_eq!(config.threads, 4);
        assert!(config.strict);
        assert!(config.histogram);
        assert_eq!(config.familiar_words, None);
    }

    #[test]
    fn zero_jobs_is_clamped() {
        let args = Args::try_parse_from(["text_stats", "-j", "0"]).unwrap();
        assert_eq!(Config::from(args).threads, 1);
    }

    #[test]
    fn verbosity_levels() {
        let level = |argv: &[&str]| log_level(&Args::try_parse_from(argv).unwrap());
        assert_eq!(level(&["text_stats"]), log::LevelFilter::Warn);
        assert_eq!(level(&["text_stats", "-v"]), log::LevelFilter::Info);
        assert_eq!(level(&["text_stats", "-vvv"]), log::LevelFilter::Trace);
        assert_eq!(level(&["text_stats", "-q"]), log::LevelFilter::Error);
    }
}
