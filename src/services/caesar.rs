// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::domain::Shift;
use crate::services::sanitizer::TextSanitizer;

pub const ROTATION_USAGE_ERROR: &str = "Rotation failed: first argument is not a number (e.g. 13)";

pub struct CaesarCipher;

impl CaesarCipher {
    /// Rotate a single ASCII letter within its case; anything else is
    /// returned unchanged.
    pub fn rotate_char(c: char, shift: Shift) -> char {
        let base = match c {
            'a'..='z' => b'a',
            'A'..='Z' => b'A',
            _ => return c,
        };
        let offset = (c as u8 - base + shift.normalized()) % 26;
        char::from(base + offset)
    }

    pub fn rotate(text: &str, shift: Shift) -> String {
        text.chars().map(|c| Self::rotate_char(c, shift)).collect()
    }

    /// Parse `<shift> <text...>` from raw chat text and render the reply.
    ///
    /// A missing or non-numeric shift yields [`ROTATION_USAGE_ERROR`].
    pub fn handle(raw: &str) -> String {
        let cleaned = TextSanitizer::sanitize(raw);
        let mut words = cleaned.split_whitespace();

        let Some(shift) = words.next().and_then(|w| w.parse::<Shift>().ok()) else {
            debug!(input = %cleaned, "rotation rejected: no numeric shift");
            return ROTATION_USAGE_ERROR.to_string();
        };

        let text = words.collect::<Vec<_>>().join(" ");
        let rotated = Self::rotate(&text, shift);
        debug!(shift = shift.get(), input = %text, output = %rotated, "rotated text");

        format!("ROT {} for _{}_ is: {}", shift, text, rotated)
    }
}

/// Entry point for callers holding raw chat text.
pub fn handle_rot(text: &str) -> String {
    CaesarCipher::handle(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_char_table() {
        let cases = [
            ('a', 1, 'b'),
            ('z', 1, 'a'),
            ('a', 26, 'a'),
            ('a', 27, 'b'),
            ('a', 52, 'a'),
            ('A', 1, 'B'),
            ('Z', 1, 'A'),
            ('A', 27, 'B'),
            ('a', -1, 'z'),
            ('a', -26, 'a'),
            ('a', -27, 'z'),
            ('a', 1_000_000, 'o'),
        ];

        for (c, shift, expected) in cases {
            assert_eq!(
                CaesarCipher::rotate_char(c, Shift::new(shift)),
                expected,
                "rotate_char({:?}, {})",
                c,
                shift
            );
        }
    }

    #[test]
    fn extreme_shifts_do_not_overflow() {
        assert_eq!(CaesarCipher::rotate_char('a', Shift::new(i64::MAX)), 'h');
        assert_eq!(CaesarCipher::rotate_char('a', Shift::new(i64::MIN)), 's');
    }
}
