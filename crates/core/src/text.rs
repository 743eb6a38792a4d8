//! One-shot helpers over a `&str`.
//!
//! Each helper runs a full analysis with the built-in familiar-word list. When several
//! values are needed from the same text, call [`analyze_text`] once and use the methods
//! on [`AnalysisResult`] instead.

use crate::familiar::FamiliarWords;
use crate::scanner::analyze_str;
use crate::stats::AnalysisResult;

#[must_use]
pub fn analyze_text(text: &str) -> AnalysisResult {
    analyze_str(text, FamiliarWords::builtin())
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    analyze_text(text).words
}

#[must_use]
pub fn sentence_count(text: &str) -> usize {
    analyze_text(text).sentences
}

#[must_use]
pub fn letter_count(text: &str) -> usize {
    analyze_text(text).letters
}

/// Total estimated syllables in `text`.
///
/// Unlike [`crate::estimate`], this tokenizes first, so `"well-known"` is two words.
#[must_use]
pub fn syllable_count(text: &str) -> usize {
    analyze_text(text).syllables
}

#[must_use]
pub fn difficult_word_count(text: &str) -> usize {
    analyze_text(text).difficult_words
}

#[must_use]
pub fn average_letters_per_word(text: &str) -> f64 {
    analyze_text(text).average_letters_per_word()
}

#[must_use]
pub fn average_syllables_per_word(text: &str) -> f64 {
    analyze_text(text).average_syllables_per_word()
}

#[must_use]
pub fn average_words_per_sentence(text: &str) -> f64 {
    analyze_text(text).average_words_per_sentence()
}

#[must_use]
pub fn words_with_at_least_n_syllables(text: &str, n: usize, include_proper_nouns: bool) -> usize {
    analyze_text(text).words_with_at_least_n_syllables(n, include_proper_nouns)
}

#[must_use]
pub fn percentage_words_with_at_least_n_syllables(
    text: &str,
    n: usize,
    include_proper_nouns: bool,
) -> f64 {
    analyze_text(text).percentage_words_with_at_least_n_syllables(n, include_proper_nouns)
}

#[must_use]
pub fn flesch_kincaid_reading_ease(text: &str) -> f64 {
    analyze_text(text).flesch_kincaid_reading_ease()
}

#[must_use]
pub fn flesch_kincaid_grade_level(text: &str) -> f64 {
    analyze_text(text).flesch_kincaid_grade_level()
}

#[must_use]
pub fn gunning_fog_score(text: &str) -> f64 {
    analyze_text(text).gunning_fog_score()
}

#[must_use]
pub fn coleman_liau_index(text: &str) -> f64 {
    analyze_text(text).coleman_liau_index()
}

#[must_use]
pub fn smog_index(text: &str) -> f64 {
    analyze_text(text).smog_index()
}

#[must_use]
pub fn automated_readability_index(text: &str) -> f64 {
    analyze_text(text).automated_readability_index()
}

/// Dale-Chall score; sentences are counted with the segment heuristic.
#[must_use]
pub fn dale_chall_readability_score(text: &str) -> f64 {
    analyze_text(text).dale_chall_readability_score()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_agree_with_full_analysis() {
        let text = "Readability formulas reward short sentences. Long words hurt!";
        let res = analyze_text(text);
        assert_eq!(word_count(text), res.words);
        assert_eq!(sentence_count(text), 2);
        assert_eq!(letter_count(text), res.letters);
        assert_eq!(syllable_count(text), res.syllables);
        assert_eq!(
            words_with_at_least_n_syllables(text, 3, false),
            res.words_with_at_least_n_syllables(3, false)
        );
    }

    #[test]
    fn syllable_count_tokenizes_hyphenated_words() {
        assert_eq!(word_count("well-known"), 2);
        assert_eq!(syllable_count("well-known"), 2);
    }
}
