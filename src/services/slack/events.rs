// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

//! Events API payloads delivered to `/events-endpoint`.

use serde::{Deserialize, Serialize};

/// Outer body of an Events API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    /// Handshake sent when the request URL is configured.
    UrlVerification {
        #[serde(default)]
        token: Option<String>,
        challenge: String,
    },
    EventCallback(EventCallback),
    #[serde(other)]
    Unknown,
}

impl EventEnvelope {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::UrlVerification { token, .. } => token.as_deref(),
            Self::EventCallback(cb) => cb.token.as_deref(),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCallback {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub event: SlackEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEvent {
    AppMention(AppMentionEvent),
    ChannelCreated(ChannelCreatedEvent),
    #[serde(other)]
    Unknown,
}

/// The bot was @mentioned; `text` still contains the `<@U...>` markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMentionEvent {
    #[serde(default)]
    pub user: Option<String>,
    pub text: String,
    pub channel: String,
    #[serde(default)]
    pub ts: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCreatedEvent {
    pub channel: CreatedChannel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedChannel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Option<String>,
}
