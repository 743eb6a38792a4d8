use crate::error::{EngineError, Result};
use crate::options::InputSource;
use crate::stats::TextReport;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use text_stats_core::{AnalysisResult, FamiliarWords, Scanner};

/// Analyze a byte stream in a single pass.
///
/// # Errors
///
/// Returns [`EngineError::Read`] if the stream fails; nothing read before the failure
/// is returned.
pub fn analyze<R: Read>(reader: R, familiar: &FamiliarWords) -> Result<AnalysisResult> {
    let mut reader = BufReader::new(reader);
    analyze_buffered(&mut reader, familiar)
}

/// Line-based streaming analysis over an existing buffered reader.
///
/// # Errors
///
/// Returns [`EngineError::Read`] if the stream fails.
pub fn analyze_buffered<R: BufRead>(reader: &mut R, familiar: &FamiliarWords) -> Result<AnalysisResult> {
    let mut scanner = Scanner::new(familiar);
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                // Lossy conversion keeps going on non-UTF8 input
                let line = String::from_utf8_lossy(&line_buf);
                scanner.feed(&line);
            }
            Err(e) => return Err(EngineError::Read { source: e }),
        }
    }

    Ok(scanner.finish())
}

/// Analyze a file on disk.
///
/// # Errors
///
/// Returns [`EngineError::FileOpen`] or [`EngineError::FileRead`].
pub fn analyze_file(path: &Path, familiar: &FamiliarWords) -> Result<AnalysisResult> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    analyze(file, familiar).map_err(|e| e.with_path(path))
}

/// Analyze one configured input and build its report.
///
/// # Errors
///
/// Propagates the read or open failure of the input.
pub fn process_source(source: &InputSource, familiar: &FamiliarWords) -> Result<TextReport> {
    let result = match source {
        InputSource::Stdin => analyze(std::io::stdin().lock(), familiar)?,
        InputSource::File(path) => analyze_file(path, familiar)?,
    };
    Ok(TextReport::new(source.name(), result))
}

/// Load a replacement familiar-word list from disk.
///
/// # Errors
///
/// Returns [`EngineError::FamiliarWords`] if the file cannot be read.
pub fn load_familiar_words(path: &Path) -> Result<FamiliarWords> {
    let text = std::fs::read_to_string(path).map_err(|e| EngineError::FamiliarWords {
        path: path.to_path_buf(),
        source: e,
    })?;
    let words = FamiliarWords::parse(&text);
    log::info!("loaded {} familiar words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Write};
    use tempfile::NamedTempFile;

    /// Yields its prefix, then fails.
    struct FailingReader {
        prefix: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.prefix.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            Err(io::Error::other("fake error"))
        }
    }

    #[test]
    fn test_reader_failure_surfaces_read_error() {
        let reader = FailingReader {
            prefix: Cursor::new(b"Some text before the fault.\nMore".to_vec()),
        };
        let err = analyze(reader, FamiliarWords::builtin()).unwrap_err();
        assert!(matches!(err, EngineError::Read { .. }));
    }

    #[test]
    fn test_empty_stream_is_not_an_error() {
        let res = analyze(io::empty(), FamiliarWords::builtin()).unwrap();
        assert_eq!(res.words, 0);
        assert!(res.average_letters_per_word().is_nan());
    }

    #[test]
    fn test_stream_matches_in_memory_analysis() {
        let text = "Lines split\nacross reads. Still one pass!\r\nEnd";
        let familiar = FamiliarWords::builtin();
        let streamed = analyze(Cursor::new(text), familiar).unwrap();
        assert_eq!(streamed, text_stats_core::analyze_str(text, familiar));
        assert_eq!(streamed.sentences, 2);
        assert_eq!(streamed.words, 8);
    }

    #[test]
    fn test_small_buffer_keeps_multibyte_chars() {
        let text = "naïve café. déjà vu";
        let familiar = FamiliarWords::builtin();
        let mut reader = BufReader::with_capacity(1, Cursor::new(text));
        let res = analyze_buffered(&mut reader, familiar).unwrap();
        assert_eq!(res.words, 4);
        assert_eq!(res.letters, 15);
    }

    #[test]
    fn test_analyze_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The quick brown fox jumps over the lazy dog").unwrap();

        let res = analyze_file(file.path(), FamiliarWords::builtin()).unwrap();
        assert_eq!(res.words, 9);
        assert_eq!(res.syllables, 11);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = analyze_file(Path::new("does/not/exist.txt"), FamiliarWords::builtin()).unwrap_err();
        assert!(matches!(err, EngineError::FileOpen { .. }));
        assert!(err.to_string().contains("exist.txt"));
    }

    #[test]
    fn test_load_familiar_words() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom\nquick\nbrown").unwrap();

        let words = load_familiar_words(file.path()).unwrap();
        assert_eq!(words.len(), 2);

        let res = analyze(Cursor::new("quick brown fox"), &words).unwrap();
        assert_eq!(res.difficult_words, 1);
    }
}
