use serde::{Deserialize, Serialize};

/// Report format for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

/// Where an input's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(std::path::PathBuf),
}

impl InputSource {
    /// Display name used in reports: `STDIN` or the path as given.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "STDIN".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl From<std::path::PathBuf> for InputSource {
    fn from(path: std::path::PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}
