// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;

/// Distinct anagrams found for a query, in dictionary order.
///
/// Words are deduplicated by their normalized form, so `Silent` and
/// `silent` count once; the first spelling seen is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` unless a word with the same normalized form is present.
    /// Returns whether it was inserted.
    pub fn insert(&mut self, word: &str, normalized: String) -> bool {
        if !self.seen.insert(normalized) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn join(&self, sep: &str) -> String {
        self.words.join(sep)
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
