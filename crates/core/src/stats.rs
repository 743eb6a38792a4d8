use serde::{Deserialize, Serialize};

use crate::histogram::SyllableHistogram;

/// Aggregate produced by one analysis pass over a text.
///
/// Counts are plain fields; the two histograms are only reachable through accessors so
/// that the proper-noun histogram can never exceed the all-words one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of words (runs of letters).
    pub words: usize,
    /// Number of sentence terminators (`.`, `!`, `?`).
    pub sentences: usize,
    /// Number of terminator-delimited segments containing a letter.
    pub segments: usize,
    /// Number of letters.
    pub letters: usize,
    /// Number of punctuation characters, terminators included.
    pub punctuation: usize,
    /// Number of whitespace characters.
    pub spaces: usize,
    /// Estimated syllables summed over all words.
    pub syllables: usize,
    /// Words missing from the familiar-word list.
    pub difficult_words: usize,

    #[serde(rename = "word_histogram")]
    syllable_words: SyllableHistogram,
    #[serde(rename = "proper_noun_histogram")]
    syllable_proper_nouns: SyllableHistogram,
}

impl AnalysisResult {
    /// Creates a new, empty `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Words per syllable count, over all words.
    #[must_use]
    pub const fn word_histogram(&self) -> &SyllableHistogram {
        &self.syllable_words
    }

    /// Words per syllable count, over capitalised words only.
    #[must_use]
    pub const fn proper_noun_histogram(&self) -> &SyllableHistogram {
        &self.syllable_proper_nouns
    }

    pub(crate) fn record_word(&mut self, syllables: usize, proper_noun: bool, familiar: bool) {
        self.words += 1;
        self.syllables += syllables;
        self.syllable_words.record(syllables);
        if proper_noun {
            self.syllable_proper_nouns.record(syllables);
        }
        if !familiar {
            self.difficult_words += 1;
        }
    }
}
