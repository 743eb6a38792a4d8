//! Familiar-word list used to classify "difficult" words for the Dale-Chall score.

use std::sync::LazyLock;

use hashbrown::HashSet;

const BUILTIN_LIST: &str = include_str!("../data/familiar_words.txt");

static BUILTIN: LazyLock<FamiliarWords> = LazyLock::new(|| FamiliarWords::parse(BUILTIN_LIST));

/// A set of lowercase words considered easy to read.
///
/// Lookup is exact: no stemming is applied, so `"jumps"` is unfamiliar even when
/// `"jump"` is on the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamiliarWords {
    words: HashSet<String>,
}

impl FamiliarWords {
    /// The list embedded in the crate.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parses a newline-separated list. Blank lines and `#` comments are skipped and
    /// entries are lowercased.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        !word.chars().all(char::is_lowercase) && self.words.contains(word.to_lowercase().as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FamiliarWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}
