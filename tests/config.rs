// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod helpers;

use std::path::{Path, PathBuf};

use anabot::cli::{Cli, Commands};
use anabot::config::Config;
use anabot::error::Error;
use helpers::write_temp_file;

// ─── Default values ──────────────────────────────────────────────────────────

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.oauth_access_token.is_none());
    assert!(config.verification_token.is_none());
    assert!(!config.debug);
    assert_eq!(
        config.dictionary_path,
        PathBuf::from("/usr/share/dict/american-english-insane")
    );
    assert_eq!(config.notification_channels, vec!["general".to_string()]);
    assert_eq!(config.listen_addr, "0.0.0.0:3000");
    assert_eq!(config.slack_api_url, "https://slack.com/api");
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
}

// ─── TOML deserialization ────────────────────────────────────────────────────

#[test]
fn load_from_valid_toml() {
    let toml_str = r#"
oauth_access_token = "xoxb-123"
verification_token = "abc"
debug = true
dictionary_path = "/tmp/words"
notification_channels = ["general", "status"]
listen_addr = "127.0.0.1:8080"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.oauth_access_token.as_deref(), Some("xoxb-123"));
    assert_eq!(config.verification_token.as_deref(), Some("abc"));
    assert!(config.debug);
    assert_eq!(config.dictionary_path, PathBuf::from("/tmp/words"));
    assert_eq!(config.notification_channels, ["general", "status"]);
    assert_eq!(config.listen_addr, "127.0.0.1:8080");
}

#[test]
fn load_partial_toml_uses_defaults() {
    let config: Config = toml::from_str(r#"dictionary_path = "/tmp/words""#).unwrap();
    assert_eq!(config.dictionary_path, PathBuf::from("/tmp/words"));
    assert_eq!(config.listen_addr, "0.0.0.0:3000");
    assert_eq!(config.notification_channels, ["general"]);
}

#[test]
fn empty_toml_uses_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    let default = Config::default();
    assert_eq!(config.dictionary_path, default.dictionary_path);
    assert_eq!(config.listen_addr, default.listen_addr);
    assert_eq!(config.timeout_secs, default.timeout_secs);
}

#[test]
fn invalid_toml_returns_error() {
    let result: std::result::Result<Config, _> = toml::from_str("debug = [invalid");
    assert!(result.is_err(), "invalid TOML should return an error");
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn rejects_bad_listen_addr() {
    let config = Config {
        listen_addr: "localhost".into(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_non_http_api_url() {
    let config = Config {
        slack_api_url: "ftp://slack.com/api".into(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_out_of_range_timeout() {
    let config = Config {
        timeout_secs: 0,
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_empty_dictionary_path() {
    let config = Config {
        dictionary_path: PathBuf::new(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn serve_requires_both_tokens() {
    let mut config = Config::default();
    assert!(matches!(
        config.require_tokens(),
        Err(Error::MissingToken {
            name: "oauth_access_token"
        })
    ));

    config.oauth_access_token = Some("xoxb-1".into());
    config.verification_token = Some(String::new());
    assert!(matches!(
        config.require_tokens(),
        Err(Error::MissingToken {
            name: "verification_token"
        })
    ));

    config.verification_token = Some("v".into());
    assert_eq!(
        config.require_tokens().unwrap(),
        ("xoxb-1".to_string(), "v".to_string())
    );
}

#[test]
fn redacted_masks_tokens() {
    let config = Config {
        oauth_access_token: Some("xoxb-secret".into()),
        verification_token: Some("hunter2".into()),
        ..Config::default()
    };
    let shown = toml::to_string(&config.redacted()).unwrap();
    assert!(!shown.contains("xoxb-secret"));
    assert!(!shown.contains("hunter2"));
    assert!(shown.contains("********"));
}

// ─── Loading through figment ─────────────────────────────────────────────────

#[test]
fn load_from_file_applies_cli_overrides() {
    let file = write_temp_file(
        br#"
dictionary_path = "/from/file"
listen_addr = "127.0.0.1:4000"
"#,
    );
    let cli = Cli {
        dictionary: Some(PathBuf::from("/from/cli")),
        verbose: true,
        command: Some(Commands::Serve {
            listen: Some("127.0.0.1:5000".into()),
        }),
        ..Cli::default()
    };

    let config = Config::load_from(file.path(), &cli).unwrap();
    assert_eq!(config.dictionary_path, PathBuf::from("/from/cli"));
    assert_eq!(config.listen_addr, "127.0.0.1:5000");
    assert!(config.debug);
}

#[test]
fn load_from_file_reports_invalid_values() {
    let file = write_temp_file(br#"timeout_secs = "soon""#);
    let result = Config::load_from(file.path(), &Cli::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn load_from_missing_file_is_an_error() {
    let path = Path::new("/nonexistent/anabot/typo.toml");
    match Config::load_from(path, &Cli::default()) {
        Err(Error::Config(msg)) => assert!(msg.contains("typo.toml"), "{msg}"),
        other => panic!("expected Error::Config, got {:?}", other.map(|c| c.listen_addr)),
    }
}
