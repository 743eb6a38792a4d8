use text_stats_core::{estimate, rules, text};

const WORDS: &[(&str, usize)] = &[
    ("advertisement", 4),
    ("bath", 1),
    ("data", 2),
    ("direct", 2),
    ("diverse", 2),
    ("due", 1),
    ("economics", 4),
    ("either", 2),
    ("employee", 3),
    ("exquisite", 3),
    ("finance", 2),
    ("forest", 2),
    ("forever", 3),
    ("glass", 1),
    ("herb", 1),
    ("juvenile", 3),
    ("kilometer", 4),
    ("laugh", 1),
    ("neither", 2),
    ("orange", 2),
    ("pajamas", 3),
    ("past", 1),
    ("roof", 1),
    ("route", 1),
    ("shoreline", 2),
    ("simile", 3),
    ("tomatoe", 3),
    ("volatile", 3),
    ("when", 1),
    ("why", 1),
];

#[test]
fn estimates_reference_words() {
    for &(word, count) in WORDS {
        assert_eq!(estimate(word), count, "{word:?} should have {count} syllables");
    }
}

#[test]
fn text_syllable_count_matches_estimate_for_single_words() {
    for &(word, count) in WORDS {
        assert_eq!(text::syllable_count(word), count, "{word:?}");
    }
}

#[test]
fn exception_table_wins_regardless_of_case() {
    for &(word, count) in rules::exceptions() {
        let title: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| if i == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert_eq!(estimate(word), count);
        assert_eq!(estimate(&title), count);
        assert_eq!(estimate(&word.to_uppercase()), count);
    }
}

#[test]
fn estimate_is_case_insensitive() {
    assert_eq!(estimate("Forest"), estimate("forest"));
    assert_eq!(estimate("ADVERTISEMENT"), estimate("advertisement"));
}
