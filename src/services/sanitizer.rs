// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;

// Non-greedy so `<@U1> word <#C2>` keeps `word`
static MARKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

pub struct TextSanitizer;

impl TextSanitizer {
    /// Strip `<...>` markup segments (user mentions, channel links) and
    /// surrounding whitespace from raw chat text.
    pub fn sanitize(raw: &str) -> String {
        MARKUP_REGEX.replace_all(raw, "").trim().to_string()
    }
}
