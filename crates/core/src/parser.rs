use crate::familiar::FamiliarWords;
use crate::scanner::Scanner;
use crate::stats::AnalysisResult;

/// Analyze an in-memory byte slice.
///
/// Input is fed line by line so no full `String` is allocated for large buffers.
/// Invalid UTF-8 sequences decode to U+FFFD, which ends a word but counts as nothing.
#[must_use]
pub fn analyze_bytes(input: &[u8], familiar: &FamiliarWords) -> AnalysisResult {
    let mut scanner = Scanner::new(familiar);

    for line_bytes in input.split_inclusive(|&b| b == b'\n') {
        let line = String::from_utf8_lossy(line_bytes);
        scanner.feed(&line);
    }

    scanner.finish()
}
