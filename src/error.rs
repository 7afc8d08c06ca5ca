// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(anabot::config::error))]
    Config(String),

    #[error("Cannot read dictionary {}", path.display())]
    #[diagnostic(
        code(anabot::dictionary::unreadable),
        help("Point dictionary_path at a newline-delimited word list (e.g. install wamerican-insane)")
    )]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing Slack {name}")]
    #[diagnostic(
        code(anabot::config::missing_token),
        help("Set it in config.toml or through the matching ANABOT_* environment variable")
    )]
    MissingToken { name: &'static str },

    #[error("Slack API '{method}' failed: {message}")]
    #[diagnostic(code(anabot::slack::api))]
    Slack { method: String, message: String },

    #[error("Slack API rate limited, retry after {retry_after_secs}s")]
    #[diagnostic(code(anabot::slack::rate_limited))]
    RateLimited { retry_after_secs: u64 },

    #[error("Server error: {0}")]
    #[diagnostic(code(anabot::server::error))]
    Server(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
