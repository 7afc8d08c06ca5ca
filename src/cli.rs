// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "anabot")]
#[command(version)]
#[command(
    about = "Slack bot that returns anagrams when given a word and applies ROT-N ciphers",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of the discovered locations
    #[arg(short, long, env = "ANABOT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Word list for anagram lookups
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the anagrams of a word
    #[command(visible_alias = "ana")]
    Anagram {
        /// Word to look up; multiple arguments are joined with spaces
        #[arg(required = true)]
        word: Vec<String>,
    },
    /// Rotate text by a shift, e.g. `rot 13 hello`
    ///
    /// Everything after `rot` is taken as text, so global flags such as
    /// `--verbose` must come before the subcommand.
    Rot {
        /// Shift followed by the text to rotate
        #[arg(
            required = true,
            allow_hyphen_values = true,
            trailing_var_arg = true
        )]
        args: Vec<String>,
    },
    /// Run the Slack bot HTTP server
    Serve {
        /// Listen address, overrides listen_addr
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
}
