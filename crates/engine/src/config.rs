use crate::options::{InputSource, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Inputs to analyze; empty or `-` means standard input.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    /// Replacement familiar-word list for Dale-Chall.
    #[builder(default)]
    pub familiar_words: Option<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    /// Abort the whole run on the first failing input.
    #[builder(default)]
    pub strict: bool,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    /// Include the per-syllable-count word table in reports.
    #[builder(default)]
    pub histogram: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            familiar_words: None,
            threads: 1,
            strict: false,
            format: OutputFormat::Table,
            histogram: false,
        }
    }
}

impl Config {
    /// Resolved input sources, in the order given.
    #[must_use]
    pub fn sources(&self) -> Vec<InputSource> {
        if self.inputs.is_empty() {
            return vec![InputSource::Stdin];
        }
        self.inputs.iter().cloned().map(InputSource::from).collect()
    }
}
