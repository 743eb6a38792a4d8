use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of words seen at each syllable count.
///
/// Keys are ordered so that iteration and serialized output are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyllableHistogram(BTreeMap<usize, usize>);

impl SyllableHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one word with `syllables` syllables.
    pub fn record(&mut self, syllables: usize) {
        *self.0.entry(syllables).or_insert(0) += 1;
    }

    /// Words recorded at exactly `syllables`.
    #[must_use]
    pub fn get(&self, syllables: usize) -> usize {
        self.0.get(&syllables).copied().unwrap_or(0)
    }

    /// Words recorded at `n` syllables or more.
    #[must_use]
    pub fn at_least(&self, n: usize) -> usize {
        self.0.range(n..).map(|(_, words)| words).sum()
    }

    /// Total number of recorded words.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(syllables, words)` pairs in ascending syllable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&s, &w)| (s, w))
    }

    /// Largest syllable count present.
    #[must_use]
    pub fn max_syllables(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }
}

impl FromIterator<usize> for SyllableHistogram {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut histogram = Self::new();
        iter.into_iter().for_each(|s| histogram.record(s));
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_query() {
        let h: SyllableHistogram = [1, 1, 2, 4].into_iter().collect();
        assert_eq!(h.get(1), 2);
        assert_eq!(h.get(3), 0);
        assert_eq!(h.at_least(0), 4);
        assert_eq!(h.at_least(2), 2);
        assert_eq!(h.at_least(5), 0);
        assert_eq!(h.total(), 4);
        assert_eq!(h.max_syllables(), Some(4));
    }

    #[test]
    fn iterates_in_key_order() {
        let h: SyllableHistogram = [3, 1, 2, 1].into_iter().collect();
        let pairs: Vec<_> = h.iter().collect();
        assert_eq!(pairs, vec![(1, 2), (2, 1), (3, 1)]);
    }

    #[test]
    fn serializes_as_map() {
        let h: SyllableHistogram = [1, 2, 2].into_iter().collect();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"1":1,"2":2}"#);
    }
}
