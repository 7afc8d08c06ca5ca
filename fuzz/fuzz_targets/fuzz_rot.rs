// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use anabot::domain::Shift;
use anabot::handle_rot;
use anabot::services::caesar::CaesarCipher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, &str)| {
    let (k, text) = input;
    let _ = handle_rot(text);

    let shift = Shift::new(k);
    let rotated = CaesarCipher::rotate(text, shift);
    assert_eq!(CaesarCipher::rotate(&rotated, shift.inverse()), text);
});
