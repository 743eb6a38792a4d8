//! Readability formulas over a completed [`AnalysisResult`].
//!
//! None of these guard against empty input: zero words or zero sentences produce
//! infinite or NaN scores, which callers are expected to treat as "not applicable".

use serde::{Deserialize, Serialize};

use crate::stats::AnalysisResult;

/// Percentage of difficult words above which the Dale-Chall score is adjusted.
const DALE_CHALL_DIFFICULT_THRESHOLD: f64 = 5.0;
const DALE_CHALL_ADJUSTMENT: f64 = 3.6365;

#[allow(clippy::cast_precision_loss)]
#[inline]
fn f(n: usize) -> f64 {
    n as f64
}

/// Averages of the result's basic counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub letters_per_word: f64,
    pub syllables_per_word: f64,
    pub words_per_sentence: f64,
}

/// All published scores for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_kincaid_reading_ease: f64,
    pub flesch_kincaid_grade_level: f64,
    pub gunning_fog: f64,
    pub coleman_liau: f64,
    pub smog: f64,
    pub automated_readability_index: f64,
    pub dale_chall: f64,
}

impl AnalysisResult {
    #[must_use]
    pub fn average_letters_per_word(&self) -> f64 {
        f(self.letters) / f(self.words)
    }

    #[must_use]
    pub fn average_syllables_per_word(&self) -> f64 {
        f(self.syllables) / f(self.words)
    }

    /// Words per sentence; the word count itself when no terminator was seen.
    #[must_use]
    pub fn average_words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            return f(self.words);
        }
        f(self.words) / f(self.sentences)
    }

    /// Words per Dale-Chall segment; the word count itself when there are none.
    #[must_use]
    pub fn average_words_per_segment(&self) -> f64 {
        if self.segments == 0 {
            return f(self.words);
        }
        f(self.words) / f(self.segments)
    }

    #[must_use]
    pub fn averages(&self) -> Averages {
        Averages {
            letters_per_word: self.average_letters_per_word(),
            syllables_per_word: self.average_syllables_per_word(),
            words_per_sentence: self.average_words_per_sentence(),
        }
    }

    /// Number of words with at least `n` syllables.
    ///
    /// With `include_proper_nouns == false`, capitalised words are subtracted; the
    /// result never drops below zero.
    #[must_use]
    pub fn words_with_at_least_n_syllables(&self, n: usize, include_proper_nouns: bool) -> usize {
        let total = self.word_histogram().at_least(n);
        if include_proper_nouns {
            return total;
        }
        total.saturating_sub(self.proper_noun_histogram().at_least(n))
    }

    #[must_use]
    pub fn percentage_words_with_at_least_n_syllables(
        &self,
        n: usize,
        include_proper_nouns: bool,
    ) -> f64 {
        (f(self.words_with_at_least_n_syllables(n, include_proper_nouns)) / f(self.words)) * 100.0
    }

    #[must_use]
    pub fn flesch_kincaid_reading_ease(&self) -> f64 {
        206.835
            - (1.015 * self.average_words_per_sentence())
            - (84.6 * self.average_syllables_per_word())
    }

    #[must_use]
    pub fn flesch_kincaid_grade_level(&self) -> f64 {
        (0.39 * self.average_words_per_sentence()) + (11.8 * self.average_syllables_per_word())
            - 15.59
    }

    /// Gunning-Fog; complex words exclude proper nouns.
    #[must_use]
    pub fn gunning_fog_score(&self) -> f64 {
        (self.average_words_per_sentence() + self.percentage_words_with_at_least_n_syllables(3, false))
            * 0.4
    }

    #[must_use]
    pub fn coleman_liau_index(&self) -> f64 {
        (5.89 * (f(self.letters) / f(self.words))) - (0.3 * (f(self.sentences) / f(self.words)))
            - 15.8
    }

    #[must_use]
    pub fn smog_index(&self) -> f64 {
        let polysyllables = f(self.words_with_at_least_n_syllables(3, true));
        1.0430 * ((polysyllables * (30.0 / f(self.sentences))) + 3.1291).sqrt()
    }

    #[must_use]
    pub fn automated_readability_index(&self) -> f64 {
        (4.71 * (f(self.letters) / f(self.words))) + (0.5 * (f(self.words) / f(self.sentences)))
            - 21.43
    }

    /// Percentage of words missing from the familiar-word list.
    #[must_use]
    pub fn percentage_difficult_words(&self) -> f64 {
        (f(self.difficult_words) / f(self.words)) * 100.0
    }

    /// Dale-Chall score, using segment-based sentence counting.
    #[must_use]
    pub fn dale_chall_readability_score(&self) -> f64 {
        let difficult = self.percentage_difficult_words();
        let raw = (0.1579 * difficult) + (0.0496 * self.average_words_per_segment());
        if difficult > DALE_CHALL_DIFFICULT_THRESHOLD {
            raw + DALE_CHALL_ADJUSTMENT
        } else {
            raw
        }
    }

    #[must_use]
    pub fn scores(&self) -> ReadabilityScores {
        ReadabilityScores {
            flesch_kincaid_reading_ease: self.flesch_kincaid_reading_ease(),
            flesch_kincaid_grade_level: self.flesch_kincaid_grade_level(),
            gunning_fog: self.gunning_fog_score(),
            coleman_liau: self.coleman_liau_index(),
            smog: self.smog_index(),
            automated_readability_index: self.automated_readability_index(),
            dale_chall: self.dale_chall_readability_score(),
        }
    }
}
