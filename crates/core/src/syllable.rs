//! Orthographic syllable estimation.
//!
//! The estimate is a heuristic: count vowel groups, then adjust with the rule tables in
//! [`crate::rules`]. It is known to be wrong on irregular words; the exception table
//! patches the worst offenders.

use std::borrow::Cow;

use crate::rules;

/// Estimates the number of syllables in a single word.
///
/// Matching is case-insensitive. Every affix, over-count and under-count rule is tried
/// in order and may fire independently of the others. The result is floored at zero,
/// so strings with no vowels (`"hmm"`, `"nth"`) can yield `0`.
#[must_use]
pub fn estimate(word: &str) -> usize {
    let lowered = word.to_lowercase();

    if let Some(count) = rules::exception(&lowered) {
        return count;
    }

    let mut working = Cow::Borrowed(lowered.as_str());
    let mut affix_count: isize = 0;
    for rule in rules::affixes() {
        if rule.is_match(&working) {
            working = Cow::Owned(rule.pattern.replace_all(&working, "").into_owned());
            affix_count += 1;
        }
    }

    let mut count = vowel_groups(&working) + affix_count;

    for rule in rules::overcounts() {
        if rule.is_match(&working) {
            count -= 1;
        }
    }

    for rule in rules::undercounts() {
        if rule.is_match(&working) {
            count += 1;
        }
    }

    usize::try_from(count).unwrap_or(0)
}

/// Counts maximal runs of `[aeiouy]` in an already lowercased word.
fn vowel_groups(word: &str) -> isize {
    let groups = rules::consonant_runs()
        .split(word)
        .filter(|part| !part.is_empty())
        .count();
    isize::try_from(groups).unwrap_or(isize::MAX)
}
