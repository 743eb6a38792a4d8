//! Heuristic rule tables for syllable estimation.
//!
//! All tables are compiled once on first use and never mutated afterwards, so they
//! can be shared freely between threads.

use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;

/// What a matching [`Rule`] does to the running syllable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    /// Remove the matched text from the working word and count one syllable for it.
    StripAndCountOne,
    /// Add one syllable.
    Increment,
    /// Remove one syllable.
    Decrement,
}

/// An ordered `(pattern, effect)` pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub effect: RuleEffect,
}

impl Rule {
    fn compile(source: &str, effect: RuleEffect) -> Self {
        // Patterns are literals in this file; a bad one is a programming error.
        let pattern = Regex::new(source).unwrap_or_else(|e| panic!("invalid rule {source:?}: {e}"));
        Self { pattern, effect }
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

/// Words that don't follow the usual rules, with their syllable counts.
const EXCEPTION_WORDS: &[(&str, usize)] = &[
    ("simile", 3),
    ("forever", 3),
    ("shoreline", 2),
    ("forest", 2),
];

/// Single-syllable prefixes and suffixes.
const AFFIX_PATTERNS: &[&str] = &["^un", "^fore", "ly$", "less$", "ful$", "ers?$", "ings?$"];

/// Vowel clusters that the naive count treats as two syllables but are one.
const OVERCOUNT_PATTERNS: &[&str] = &[
    "cial",
    "tia",
    "cius",
    "cious",
    "giu",
    "ion",
    "ise",
    "iou",
    "sia$",
    "[^aeiouyt]{2,}ed$",
    ".ely$",
    "[cg]h?e[rsd]?$",
    "rved?$",
    "[aeiouy][dt]es?$",
    "[aeiouy][^aeiouydt]e[rsd]?$",
    "^[dr]e[aeiou][^aeiou]+$",
    "[aeiouy]rse$",
];

/// Clusters that the naive count treats as one syllable but are two.
const UNDERCOUNT_PATTERNS: &[&str] = &[
    "ia",
    "riet",
    "dien",
    "iu",
    "io",
    "ii",
    "[aeiouym]bl$",
    "[aeiou]{3}",
    "^mc",
    "ism$",
    "[^aeiouy]{2}l$",
    "[^l]lien",
    "^coa[dglx].",
    "[^gq]ua[^auieo]",
    "dnt$",
    "uity$",
    "ie(r|st)$",
    "yee$",
];

static EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> =
    LazyLock::new(|| EXCEPTION_WORDS.iter().copied().collect());

static AFFIXES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile_all(AFFIX_PATTERNS, RuleEffect::StripAndCountOne));

static OVERCOUNTS: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile_all(OVERCOUNT_PATTERNS, RuleEffect::Decrement));

static UNDERCOUNTS: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile_all(UNDERCOUNT_PATTERNS, RuleEffect::Increment));

/// Splits a word into vowel groups; `y` counts as a vowel here.
static CONSONANT_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^aeiouy]+").unwrap_or_else(|e| panic!("invalid consonant pattern: {e}"))
});

fn compile_all(sources: &[&str], effect: RuleEffect) -> Vec<Rule> {
    sources.iter().map(|s| Rule::compile(s, effect)).collect()
}

/// Looks up a lowercase word in the exception table.
#[must_use]
pub fn exception(word: &str) -> Option<usize> {
    EXCEPTIONS.get(word).copied()
}

/// All exception-table entries, in table order.
#[must_use]
pub fn exceptions() -> &'static [(&'static str, usize)] {
    EXCEPTION_WORDS
}

/// Affix rules, in application order.
#[must_use]
pub fn affixes() -> &'static [Rule] {
    &AFFIXES
}

/// Over-count (decrement) rules, in application order.
#[must_use]
pub fn overcounts() -> &'static [Rule] {
    &OVERCOUNTS
}

/// Under-count (increment) rules, in application order.
#[must_use]
pub fn undercounts() -> &'static [Rule] {
    &UNDERCOUNTS
}

pub(crate) fn consonant_runs() -> &'static Regex {
    &CONSONANT_RUNS
}
