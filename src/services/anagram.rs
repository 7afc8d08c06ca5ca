// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::domain::{MatchSet, NormalizedWord};
use crate::services::dictionary::Dictionary;
use crate::services::sanitizer::TextSanitizer;

pub struct AnagramMatcher;

impl AnagramMatcher {
    /// Find every dictionary word that is an anagram of `query`.
    ///
    /// Only entries with the query's signature are compared, and the query
    /// itself (in any casing) is never reported. A query that is empty after
    /// normalization has no anagrams.
    pub fn find(query: &str, dictionary: &Dictionary) -> MatchSet {
        let mut matches = MatchSet::new();

        let query = NormalizedWord::new(query);
        if query.is_empty() {
            return matches;
        }

        let key = query.key();
        let text = query.text();

        for entry in dictionary.candidates(query.signature()) {
            if entry.key() != &key || entry.normalized() == text {
                continue;
            }
            if matches.insert(entry.word(), entry.normalized().to_string()) {
                debug!(word = entry.word(), query = %text, "anagram found");
            }
        }

        matches
    }

    /// Sanitize raw chat text, look it up and render the reply.
    pub fn handle(raw: &str, dictionary: &Dictionary) -> String {
        let query = TextSanitizer::sanitize(raw);
        let matches = Self::find(&query, dictionary);
        Self::format_response(&query, &matches)
    }

    pub fn format_response(query: &str, matches: &MatchSet) -> String {
        match matches.len() {
            0 => format!("No anagrams found for _{}_", query),
            1 => format!("Anagram for _{}_ is: {}", query, matches.join(", ")),
            _ => format!("Anagrams for _{}_ are: {}", query, matches.join(", ")),
        }
    }
}

/// Entry point for callers holding raw chat text.
pub fn handle_anagram(text: &str, dictionary: &Dictionary) -> String {
    AnagramMatcher::handle(text, dictionary)
}
