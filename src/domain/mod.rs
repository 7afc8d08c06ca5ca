// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod matches;
mod shift;
mod word;

pub use matches::*;
pub use shift::*;
pub use word::*;
