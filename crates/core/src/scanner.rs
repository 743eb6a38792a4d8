//! Single-pass text scanner.
//!
//! The scanner classifies each user-perceived character (grapheme cluster), keeps the
//! running counts and hands every completed word to the syllable estimator. It owns the
//! [`AnalysisResult`] under construction until [`Scanner::finish`] gives it away.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_segmentation::UnicodeSegmentation;

use crate::familiar::FamiliarWords;
use crate::segment::{self, SegmentCounter};
use crate::stats::AnalysisResult;
use crate::syllable;

/// Classification of a grapheme cluster, by its first code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Whitespace,
    Punctuation,
    Other,
}

impl CharClass {
    #[must_use]
    pub fn of(c: char) -> Self {
        if is_letter(c) {
            Self::Letter
        } else if c.is_whitespace() {
            Self::Whitespace
        } else if is_punctuation(c) {
            Self::Punctuation
        } else {
            Self::Other
        }
    }
}

/// Unicode letter (general category `L*`).
///
/// Letter-like numbers and symbols (`Ⅻ`, `Ⓐ`) are not letters.
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Unicode punctuation (general category `P*`). Symbols such as `$` or `+` are excluded.
#[inline]
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Uppercase letter (`Lu`); marks a word as a proper noun when it comes first.
#[inline]
#[must_use]
pub fn is_uppercase_letter(c: char) -> bool {
    c.general_category() == GeneralCategory::UppercaseLetter
}

/// Streaming accumulator for one analysis pass.
#[derive(Debug)]
pub struct Scanner<'a> {
    familiar: &'a FamiliarWords,
    result: AnalysisResult,
    word: String,
    segments: SegmentCounter,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(familiar: &'a FamiliarWords) -> Self {
        Self {
            familiar,
            result: AnalysisResult::new(),
            word: String::new(),
            segments: SegmentCounter::new(),
        }
    }

    /// Feeds a chunk of text.
    ///
    /// Chunks must split the text on grapheme boundaries; whole lines (terminator
    /// included) always do. An open word carries over to the next chunk.
    pub fn feed(&mut self, chunk: &str) -> &mut Self {
        for grapheme in chunk.graphemes(true) {
            let Some(first) = grapheme.chars().next() else {
                continue;
            };
            grapheme.chars().for_each(|c| self.segments.push(c));

            match CharClass::of(first) {
                CharClass::Letter => {
                    self.result.letters += 1;
                    self.word.push_str(grapheme);
                    continue;
                }
                CharClass::Whitespace => {
                    self.result.spaces += grapheme.chars().filter(|c| c.is_whitespace()).count();
                }
                CharClass::Punctuation => {
                    self.result.punctuation += 1;
                    if segment::is_terminator(first) {
                        self.result.sentences += 1;
                    }
                }
                CharClass::Other => {}
            }

            self.end_word();
        }
        self
    }

    /// Flushes any open word and returns the completed result.
    #[must_use]
    pub fn finish(mut self) -> AnalysisResult {
        self.end_word();
        self.result.segments = self.segments.finish();
        self.result
    }

    fn end_word(&mut self) {
        if self.word.is_empty() {
            return;
        }

        let syllables = syllable::estimate(&self.word);
        let proper_noun = self.word.chars().next().is_some_and(is_uppercase_letter);
        let familiar = self.familiar.contains(&self.word);
        self.result.record_word(syllables, proper_noun, familiar);
        self.word.clear();
    }
}

/// Analyzes an in-memory string.
#[must_use]
pub fn analyze_str(text: &str, familiar: &FamiliarWords) -> AnalysisResult {
    let mut scanner = Scanner::new(familiar);
    scanner.feed(text);
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QBF: &str = "The quick brown fox jumps over the lazy dog";

    fn analyze(text: &str) -> AnalysisResult {
        analyze_str(text, FamiliarWords::builtin())
    }

    #[test]
    fn quick_brown_fox_counts() {
        let res = analyze(QBF);
        assert_eq!(res.words, 9);
        assert_eq!(res.letters, 35);
        assert_eq!(res.spaces, 8);
        assert_eq!(res.syllables, 11);
        assert_eq!(res.sentences, 0);
        assert_eq!(res.segments, 1);
        assert_eq!(res.difficult_words, 1);
    }

    #[test]
    fn classifies_characters() {
        assert_eq!(CharClass::of('a'), CharClass::Letter);
        assert_eq!(CharClass::of('é'), CharClass::Letter);
        assert_eq!(CharClass::of('\t'), CharClass::Whitespace);
        assert_eq!(CharClass::of('?'), CharClass::Punctuation);
        assert_eq!(CharClass::of('¿'), CharClass::Punctuation);
        assert_eq!(CharClass::of('—'), CharClass::Punctuation);
        assert_eq!(CharClass::of('+'), CharClass::Other);
        assert_eq!(CharClass::of('$'), CharClass::Other);
        assert_eq!(CharClass::of('7'), CharClass::Other);
    }

    #[test]
    fn punctuation_from_any_script_is_counted() {
        // Ethiopic, Tibetan, Myanmar, supplemental, Thai and Khmer `Po` marks.
        for mark in ['\u{1362}', '\u{0F0D}', '\u{104B}', '\u{2E53}', '\u{0E4F}', '\u{17D4}'] {
            let res = analyze(&format!("abc{mark}def"));
            assert_eq!(res.punctuation, 1, "U+{:04X}", u32::from(mark));
            assert_eq!(res.words, 2);
            assert_eq!(res.sentences, 0);
        }
    }

    #[test]
    fn letter_like_symbols_are_not_letters() {
        assert_eq!(CharClass::of('\u{216B}'), CharClass::Other); // Ⅻ, Nl
        assert_eq!(CharClass::of('\u{24B6}'), CharClass::Other); // Ⓐ, So
        let res = analyze("\u{24B6}bc \u{216B}");
        assert_eq!(res.words, 1);
        assert_eq!(res.letters, 2);
        assert_eq!(res.proper_noun_histogram().total(), 0);
    }

    #[test]
    fn only_uppercase_letters_mark_proper_nouns() {
        assert!(is_uppercase_letter('A'));
        assert!(is_uppercase_letter('\u{00C9}'));
        assert!(!is_uppercase_letter('\u{01C5}')); // titlecase Dž
        assert!(!is_uppercase_letter('\u{24B6}'));
        let res = analyze("\u{00C9}cole \u{01C5}ungla");
        assert_eq!(res.words, 2);
        assert_eq!(res.proper_noun_histogram().total(), 1);
    }

    #[test]
    fn every_terminator_counts_as_a_sentence() {
        let res = analyze("Wait... what?!");
        assert_eq!(res.sentences, 5);
        assert_eq!(res.punctuation, 5);
        assert_eq!(res.segments, 2);
        assert_eq!(res.words, 2);
    }

    #[test]
    fn other_characters_end_words_without_counting() {
        let res = analyze("abc1def+ghi");
        assert_eq!(res.words, 3);
        assert_eq!(res.letters, 9);
        assert_eq!(res.punctuation, 0);
        assert_eq!(res.spaces, 0);
    }

    #[test]
    fn crlf_counts_two_spaces() {
        let res = analyze("one\r\ntwo");
        assert_eq!(res.spaces, 2);
        assert_eq!(res.words, 2);
    }

    #[test]
    fn combining_marks_stay_inside_words() {
        // "cafe" followed by U+0301 COMBINING ACUTE ACCENT.
        let res = analyze("cafe\u{301} noir");
        assert_eq!(res.words, 2);
        assert_eq!(res.letters, 8);
    }

    #[test]
    fn words_carry_across_chunks() {
        let mut scanner = Scanner::new(FamiliarWords::builtin());
        scanner.feed("for").feed("est");
        let res = scanner.finish();
        assert_eq!(res.words, 1);
        assert_eq!(res.syllables, 2);
    }

    #[test]
    fn capitalised_words_feed_proper_noun_histogram() {
        let res = analyze("Alice met bob");
        assert_eq!(res.word_histogram().total(), 3);
        assert_eq!(res.proper_noun_histogram().total(), 1);
    }

    #[test]
    fn empty_input_is_empty_result() {
        assert_eq!(analyze(""), AnalysisResult::new());
    }
}
