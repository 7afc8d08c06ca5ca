// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::str::FromStr;

const ALPHABET_LEN: i64 = 26;

/// Signed rotation distance for the Caesar cipher.
///
/// Keeps the value as given for display; [`Shift::normalized`] yields the
/// effective rotation in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(i64);

impl Shift {
    pub fn new(distance: i64) -> Self {
        Self(distance)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn normalized(self) -> u8 {
        // rem_euclid is always in 0..26
        self.0.rem_euclid(ALPHABET_LEN) as u8
    }

    /// The shift that undoes this one.
    pub fn inverse(self) -> Self {
        Self(-i64::from(self.normalized()))
    }
}

impl From<i64> for Shift {
    fn from(distance: i64) -> Self {
        Self(distance)
    }
}

impl FromStr for Shift {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
