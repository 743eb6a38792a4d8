// Shared fixtures for the core integration tests.
#![allow(dead_code)]

pub const QBF: &str = "The quick brown fox jumps over the lazy dog";

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do
\t\t\teiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim
\t\t\tad minim veniam, quis nostrud exercitation ullamco laboris nisi ut
\t\t\taliquip ex ea commodo consequat. Duis aute irure dolor in
\t\t\treprehenderit in voluptate velit esse cillum dolore eu fugiat nulla
\t\t\tpariatur. Excepteur sint occaecat cupidatat non proident, sunt in
\t\t\tculpa qui officia deserunt mollit anim id est laborum.";

/// Six words: two capitalised (2 and 1 syllables), four lowercase (1, 3, 4, 1).
pub const MIXED_CASE: &str = "Hello World, this exquisite advertisement works";

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
