// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod anagram;
pub mod caesar;
pub mod dictionary;
pub mod sanitizer;
pub mod slack;
