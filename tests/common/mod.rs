//! Common test utilities for corpus-backed poet tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Corpus used throughout the scenario tests
pub const STAR_TREK: &str = "To explore strange new worlds\n\
To seek out new life and new civilizations\n";

/// Write `contents` to a temporary corpus file
///
/// The file is deleted when the returned handle is dropped.
pub fn corpus_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(contents.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}
