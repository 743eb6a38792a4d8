//! Syllable estimation and readability statistics for English text.
//!
//! The crate is pure: it never touches the file system. [`Scanner`] accumulates
//! statistics from text chunks, [`estimate`] counts syllables in a single word, and the
//! readability formulas are methods on [`AnalysisResult`].
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod familiar;
pub mod histogram;
pub mod parser;
pub mod readability;
pub mod rules;
pub mod scanner;
pub mod segment;
pub mod stats;
pub mod syllable;
pub mod text;

pub use familiar::FamiliarWords;
pub use histogram::SyllableHistogram;
pub use parser::analyze_bytes;
pub use readability::{Averages, ReadabilityScores};
pub use scanner::{Scanner, analyze_str};
pub use segment::count_segments;
pub use stats::AnalysisResult;
pub use syllable::estimate;
