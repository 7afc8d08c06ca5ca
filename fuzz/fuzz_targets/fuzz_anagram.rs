// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use anabot::domain::{NormalizedWord, canonical_key};
use anabot::services::anagram::AnagramMatcher;
use anabot::{Dictionary, handle_anagram};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, Vec<&str>)| {
    let (query, words) = input;
    let dictionary = Dictionary::from_words(words.iter().copied());
    let _ = handle_anagram(query, &dictionary);

    let normalized = NormalizedWord::new(query).text();
    let key = canonical_key(query);
    for word in AnagramMatcher::find(query, &dictionary).iter() {
        assert_ne!(NormalizedWord::new(word).text(), normalized);
        assert_eq!(canonical_key(word), key);
    }
});
