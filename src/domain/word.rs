// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

/// Cheap pre-filter for anagram candidates: character count plus the sum
/// of code points. Equal signatures are necessary but not sufficient for
/// two words to be anagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    pub len: usize,
    pub checksum: u64,
}

/// Lowercased, space-stripped, character-sorted form of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word after case folding and space removal, with its signature.
///
/// The canonical key is computed lazily through [`NormalizedWord::key`] so
/// callers can reject on signature first and only pay for the sort when the
/// signature already agrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    chars: Vec<char>,
    signature: Signature,
}

impl NormalizedWord {
    pub fn new(word: &str) -> Self {
        // Folded one char at a time: `str::to_lowercase` maps a final sigma
        // differently, which would make keys depend on character order.
        let chars: Vec<char> = word
            .chars()
            .filter(|&c| c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        let checksum = chars.iter().map(|&c| u64::from(u32::from(c))).sum();
        let signature = Signature {
            len: chars.len(),
            checksum,
        };
        Self { chars, signature }
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The normalized text itself, used for self-match exclusion.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn key(&self) -> CanonicalKey {
        let mut sorted = self.chars.clone();
        sorted.sort_unstable();
        CanonicalKey(sorted.into_iter().collect())
    }
}

/// Canonical key of an arbitrary word.
pub fn canonical_key(word: &str) -> CanonicalKey {
    NormalizedWord::new(word).key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercase_sorted_without_spaces() {
        assert_eq!(canonical_key("Dormitory").as_str(), "dimoorrty");
        assert_eq!(canonical_key("dirty room").as_str(), "dimoorrty");
    }

    #[test]
    fn signature_counts_only_non_space_chars() {
        let w = NormalizedWord::new("a b");
        assert_eq!(w.signature().len, 2);
        assert_eq!(w.signature().checksum, u64::from(b'a') + u64::from(b'b'));
    }

    #[test]
    fn case_folding_ignores_position() {
        assert_eq!(canonical_key("ΑΣ"), canonical_key("ΣΑ"));
        assert_eq!(NormalizedWord::new("ΟΔΟΣ").text(), "οδοσ");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert!(NormalizedWord::new("   ").is_empty());
        assert!(canonical_key("").is_empty());
    }
}
