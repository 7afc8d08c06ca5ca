// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::error::{Error, Result};

/// System-wide config, lowest-priority file source
const SYSTEM_CONFIG: &str = "/etc/anabot/config.toml";

/// Project-level config in the working directory
const LOCAL_CONFIG: &str = "anabot.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bot token used for Slack Web API calls (xoxb-...)
    #[serde(default)]
    pub oauth_access_token: Option<String>,

    /// Token Slack sends with every slash command and event
    #[serde(default)]
    pub verification_token: Option<String>,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,

    /// Newline-delimited word list used for anagram lookups
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    /// Channels to join at startup and announce new channels into
    #[serde(default = "default_notification_channels")]
    pub notification_channels: Vec<String>,

    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Slack Web API base URL
    #[serde(default = "default_slack_api_url")]
    pub slack_api_url: String,

    /// Slack Web API request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("/usr/share/dict/american-english-insane")
}
fn default_notification_channels() -> Vec<String> {
    vec!["general".into()]
}
fn default_listen_addr() -> String {
    "0.0.0.0:3000".into()
}
fn default_slack_api_url() -> String {
    "https://slack.com/api".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oauth_access_token: None,
            verification_token: None,
            debug: false,
            dictionary_path: default_dictionary_path(),
            notification_channels: default_notification_channels(),
            listen_addr: default_listen_addr(),
            slack_api_url: default_slack_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > project config > user config > system config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in Self::file_sources() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (ANABOT_DICTIONARY_PATH, ANABOT_DEBUG, etc.)
        figment = figment.merge(Env::prefixed("ANABOT_").split("__"));

        Self::from_figment(figment, cli)
    }

    /// Load from a single explicit file (plus env and CLI), skipping discovery.
    pub fn load_from(path: &Path, cli: &Cli) -> Result<Self> {
        // Discovered files are optional, a named one is not
        if !path.is_file() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ANABOT_").split("__"));
        Self::from_figment(figment, cli)
    }

    fn from_figment(figment: Figment, cli: &Cli) -> Result<Self> {
        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn file_sources() -> Vec<PathBuf> {
        let mut sources = vec![PathBuf::from(SYSTEM_CONFIG)];
        if let Some(path) = Self::config_path() {
            sources.push(path);
        }
        if let Ok(cwd) = std::env::current_dir() {
            sources.push(cwd.join(LOCAL_CONFIG));
        }
        sources
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "anabot").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.dictionary {
            self.dictionary_path = path.clone();
        }
        if cli.verbose {
            self.debug = true;
        }
        if let Some(Commands::Serve {
            listen: Some(addr),
        }) = &cli.command
        {
            self.listen_addr = addr.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dictionary_path.as_os_str().is_empty() {
            return Err(Error::Config("dictionary_path cannot be empty".into()));
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            return Err(Error::Config(format!(
                "listen_addr must be a socket address like 0.0.0.0:3000, got '{}'",
                self.listen_addr
            )));
        }

        match url::Url::parse(&self.slack_api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(Error::Config(format!(
                    "slack_api_url must be an http(s) URL, got '{}'",
                    self.slack_api_url
                )));
            }
        }

        if !(1..=300).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–300, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }

    /// The server needs both Slack tokens; the CLI commands need neither.
    pub fn require_tokens(&self) -> Result<(String, String)> {
        let oauth = self
            .oauth_access_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingToken {
                name: "oauth_access_token",
            })?;
        let verification = self
            .verification_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingToken {
                name: "verification_token",
            })?;
        Ok((oauth, verification))
    }

    /// Copy safe to print: tokens are masked.
    pub fn redacted(&self) -> Self {
        let mask = |t: &Option<String>| t.as_ref().map(|_| "********".to_string());
        Self {
            oauth_access_token: mask(&self.oauth_access_token),
            verification_token: mask(&self.verification_token),
            ..self.clone()
        }
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# anabot configuration

# Slack bot token (xoxb-...) used to post messages and join channels
oauth_access_token = ""

# Verification token Slack sends with slash commands and events
verification_token = ""

# Enable debug logging
debug = false

# Word list for anagram lookups, one word per line
dictionary_path = "/usr/share/dict/american-english-insane"

# Channels to join at startup; new channels are announced here
notification_channels = ["general", "status"]

# HTTP listen address for /command-endpoint and /events-endpoint
listen_addr = "0.0.0.0:3000"

# Slack Web API base URL
# slack_api_url = "https://slack.com/api"

# Slack API request timeout in seconds (1-300)
# timeout_secs = 30
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
