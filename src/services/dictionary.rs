// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{CanonicalKey, NormalizedWord, Signature};
use crate::error::{Error, Result};

/// One dictionary line, precomputed for matching.
#[derive(Debug, Clone)]
pub struct Entry {
    word: String,
    normalized: String,
    key: CanonicalKey,
    signature: Signature,
}

impl Entry {
    fn new(word: String) -> Option<Self> {
        let normalized = NormalizedWord::new(&word);
        if normalized.is_empty() {
            return None;
        }
        Some(Self {
            key: normalized.key(),
            signature: normalized.signature(),
            normalized: normalized.text(),
            word,
        })
    }

    /// The word as it appears in the word list.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }
}

/// Immutable in-memory word list, bucketed by [`Signature`].
///
/// Built once at startup and shared behind an `Arc`; lookups are plain
/// reads, so concurrent callers never contend.
#[derive(Debug, Default)]
pub struct Dictionary {
    buckets: HashMap<Signature, Vec<Entry>>,
    len: usize,
    path: Option<PathBuf>,
}

impl Dictionary {
    /// Load a newline-delimited word list from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dictionary =
            Self::from_reader(BufReader::new(file)).map_err(|source| Error::Dictionary {
                path: path.to_path_buf(),
                source,
            })?;
        dictionary.path = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            words = dictionary.len,
            buckets = dictionary.buckets.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Read every line of `reader`. Invalid UTF-8 is replaced rather than
    /// rejected, since system word lists are not always clean.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            lines.push(line.trim_end_matches(['\n', '\r']).trim_matches(' ').to_string());
        }
        Ok(Self::from_words(lines))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        // Sorting every word is the expensive part; order is preserved by collect
        let entries: Vec<Entry> = words.into_par_iter().filter_map(Entry::new).collect();

        let len = entries.len();
        let mut buckets: HashMap<Signature, Vec<Entry>> = HashMap::new();
        for entry in entries {
            buckets.entry(entry.signature).or_default().push(entry);
        }

        debug!(words = len, buckets = buckets.len(), "dictionary indexed");
        Self {
            buckets,
            len,
            path: None,
        }
    }

    /// Entries sharing `signature`, in word-list order.
    pub fn candidates(&self, signature: Signature) -> &[Entry] {
        self.buckets
            .get(&signature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Path the list was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
