// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use anabot::services::sanitizer::TextSanitizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = TextSanitizer::sanitize(data);
});
