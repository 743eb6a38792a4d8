//! Sentence-segment heuristic.
//!
//! Splits text on `.`, `!` and `?` and counts the pieces that contain at least one
//! letter. Runs of terminators (`"..."`, `"?!"`) close a single segment. This is a
//! separate strategy from the per-terminator sentence count of the scanner and feeds
//! only the Dale-Chall score.

use crate::scanner::is_letter;

/// Incremental segment counter, fed one character at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCounter {
    segments: usize,
    open: bool,
}

impl SegmentCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: 0,
            open: false,
        }
    }

    #[inline]
    pub fn push(&mut self, c: char) {
        if is_terminator(c) {
            self.close();
        } else if is_letter(c) {
            self.open = true;
        }
    }

    /// Closes any open segment and returns the total.
    #[must_use]
    pub fn finish(mut self) -> usize {
        self.close();
        self.segments
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.segments + self.open as usize
    }

    fn close(&mut self) {
        if self.open {
            self.segments += 1;
            self.open = false;
        }
    }
}

#[inline]
#[must_use]
pub const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Counts sentence segments in `text`.
#[must_use]
pub fn count_segments(text: &str) -> usize {
    let mut counter = SegmentCounter::new();
    text.chars().for_each(|c| counter.push(c));
    counter.finish()
}
