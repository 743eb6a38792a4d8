use crate::error::EngineError;
use serde::Serialize;
use text_stats_core::{AnalysisResult, Averages, ReadabilityScores};

/// Analysis of one input, with its derived metrics precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    pub name: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub averages: Averages,
    pub scores: ReadabilityScores,
}

impl TextReport {
    #[must_use]
    pub fn new(name: impl Into<String>, result: AnalysisResult) -> Self {
        let averages = result.averages();
        let scores = result.scores();
        Self {
            name: name.into(),
            result,
            averages,
            scores,
        }
    }
}

/// Outcome of a run over several inputs.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Successful reports, in input order.
    pub reports: Vec<TextReport>,
    /// Inputs that failed, by display name.
    pub errors: Vec<(String, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
