// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

mod helpers;

use assert_cmd::Command;
use predicates::prelude::*;

use helpers::write_temp_file;

fn anabot() -> Command {
    let mut cmd = Command::cargo_bin("anabot").unwrap();
    // Keep discovered config files and the environment out of the way
    cmd.current_dir(std::env::temp_dir())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn anagram_command_prints_matches() {
    let words = write_temp_file(b"listen\nsilent\nenlist\nbanana\n");
    anabot()
        .args(["--dictionary"])
        .arg(words.path())
        .args(["anagram", "listen"])
        .assert()
        .success()
        .stdout("Anagrams for _listen_ are: silent, enlist\n");
}

#[test]
fn ana_alias_works() {
    let words = write_temp_file(b"listen\nbanana\n");
    anabot()
        .arg("ana")
        .arg("xyz")
        .arg("--dictionary")
        .arg(words.path())
        .assert()
        .success()
        .stdout("No anagrams found for _xyz_\n");
}

#[test]
fn rot_command_accepts_negative_shift() {
    anabot()
        .args(["rot", "-1", "BCD"])
        .assert()
        .success()
        .stdout("ROT -1 for _BCD_ is: ABC\n");
}

#[test]
fn rot_takes_global_flags_before_the_subcommand() {
    anabot()
        .args(["-v", "rot", "3", "abc"])
        .assert()
        .success()
        .stdout("ROT 3 for _abc_ is: def\n");
}

#[test]
fn init_writes_every_config_key() {
    let home = tempfile::tempdir().unwrap();
    anabot()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .arg("init")
        .assert()
        .success();

    let path = home.path().join(".config/anabot/config.toml");
    let content = std::fs::read_to_string(&path).unwrap();
    for key in [
        "oauth_access_token",
        "verification_token",
        "debug",
        "dictionary_path",
        "notification_channels",
        "listen_addr",
        "slack_api_url",
        "timeout_secs",
    ] {
        assert!(content.contains(key), "missing {key}");
    }
    let config: anabot::Config = toml::from_str(&content).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn explicit_missing_config_file_fails() {
    anabot()
        .args(["--config", "/nonexistent/anabot/typo.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn rot_command_reports_bad_shift() {
    anabot()
        .args(["rot", "abc"])
        .assert()
        .success()
        .stdout("Rotation failed: first argument is not a number (e.g. 13)\n");
}

#[test]
fn missing_dictionary_fails_with_diagnostic() {
    anabot()
        .args(["--dictionary", "/nonexistent/anabot/words", "anagram", "listen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read dictionary"));
}

#[test]
fn serve_without_tokens_fails() {
    let words = write_temp_file(b"listen\n");
    anabot()
        .arg("--dictionary")
        .arg(words.path())
        .env_remove("ANABOT_OAUTH_ACCESS_TOKEN")
        .env_remove("ANABOT_VERIFICATION_TOKEN")
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing Slack oauth_access_token"));
}
