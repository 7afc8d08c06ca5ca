// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

//! Slash command payloads (`/ana`, `/devana`, `/rot`).

use serde::{Deserialize, Serialize};

/// Form-encoded body Slack posts for a slash command. Only the fields the
/// bot reads are modelled; the rest are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlashCommandPayload {
    /// Verification token
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    /// The command, e.g. `/ana`
    pub command: String,
    /// Text after the command
    #[serde(default)]
    pub text: String,
}

/// The commands the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Anagram,
    Rot,
}

impl SlashCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "/ana" | "/devana" => Some(Self::Anagram),
            "/rot" => Some(Self::Rot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    Ephemeral,
    InChannel,
}

/// Immediate JSON reply to a slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl SlashCommandResponse {
    /// Reply visible to everyone in the channel.
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }
}
