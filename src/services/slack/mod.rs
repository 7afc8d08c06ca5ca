// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub mod client;
pub mod commands;
pub mod events;

use crate::error::Result;

/// A conversation as returned by `conversations.list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_member: bool,
}

/// Body of a `chat.postMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Channel ID or name
    pub channel: String,
    pub text: String,
    /// `full` asks Slack to linkify `#channel` and `@user` references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
}

impl OutgoingMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            parse: None,
        }
    }

    pub fn with_full_parse(mut self) -> Self {
        self.parse = Some("full".into());
        self
    }
}

#[async_trait]
pub trait SlackApi: Send + Sync {
    async fn post_message(&self, message: &OutgoingMessage) -> Result<()>;

    async fn list_channels(&self) -> Result<Vec<Channel>>;

    async fn join_channel(&self, channel_id: &str) -> Result<()>;
}

/// Text posted to the notification channels when a channel is created.
pub fn channel_created_announcement(name: &str) -> String {
    format!("A new channel with name #{} was created", name)
}

/// Join each named channel, resolving names to IDs via `conversations.list`.
///
/// Unknown names are skipped with a warning and channels the bot already
/// belongs to are left alone; API failures abort.
pub async fn join_notification_channels(api: &dyn SlackApi, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    let channels = api.list_channels().await?;

    for name in names {
        let name = name.trim_start_matches('#');
        let Some(channel) = channels.iter().find(|c| c.name == name) else {
            warn!(channel = name, "notification channel not found");
            continue;
        };

        if channel.is_member {
            info!(channel = name, "already in notification channel");
            continue;
        }

        info!(channel = name, id = %channel.id, "joining notification channel");
        api.join_channel(&channel.id).await?;
    }

    Ok(())
}
