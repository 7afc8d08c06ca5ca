// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;

use anabot::Dictionary;
use tempfile::NamedTempFile;

/// The word list used by most scenarios
#[allow(dead_code)]
pub const SAMPLE_WORDS: &[&str] = &["listen", "silent", "enlist", "banana"];

/// Build an in-memory dictionary from a list of words
#[allow(dead_code)]
pub fn make_dictionary(words: &[&str]) -> Dictionary {
    Dictionary::from_words(words.iter().copied())
}

/// Write raw bytes (a word list or a config file) to a temporary file
#[allow(dead_code)]
pub fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
