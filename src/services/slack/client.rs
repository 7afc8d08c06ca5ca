// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Channel, OutgoingMessage, SlackApi};
use crate::config::Config;
use crate::error::{Error, Result};

/// Page size for `conversations.list`
const PAGE_LIMIT: &str = "200";

/// Common envelope of every Web API response.
#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    data: T,
}

#[derive(Deserialize)]
struct ConversationsPage {
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Deserialize)]
struct Empty {}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl SlackClient {
    pub fn new(config: &Config, token: SecretString) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            // Sanitize: remove trailing slashes to avoid //chat.postMessage
            base_url: config.slack_api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, request: RequestBuilder) -> Result<T> {
        debug!(method, "slack api call");

        let response = request
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(30);
            return Err(Error::RateLimited { retry_after_secs });
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Slack {
                method: method.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let body: ApiResponse<T> = response.json().await?;
        if !body.ok {
            return Err(Error::Slack {
                method: method.to_string(),
                message: body.error.unwrap_or_else(|| "unknown".into()),
            });
        }

        Ok(body.data)
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn post_message(&self, message: &OutgoingMessage) -> Result<()> {
        let method = "chat.postMessage";
        let request = self.client.post(self.url(method)).json(message);
        self.call::<Empty>(method, request).await?;
        Ok(())
    }

    async fn list_channels(&self) -> Result<Vec<Channel>> {
        let method = "conversations.list";
        let mut channels = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut params = vec![("limit", PAGE_LIMIT), ("exclude_archived", "true")];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.as_str()));
            }
            let url = url::Url::parse_with_params(&self.url(method), &params).map_err(|e| {
                Error::Slack {
                    method: method.to_string(),
                    message: e.to_string(),
                }
            })?;

            let page: ConversationsPage = self.call(method, self.client.get(url)).await?;
            channels.extend(page.channels);

            cursor = page
                .response_metadata
                .map(|m| m.next_cursor)
                .unwrap_or_default();
            if cursor.is_empty() {
                break;
            }
        }

        debug!(count = channels.len(), "channels listed");
        Ok(channels)
    }

    async fn join_channel(&self, channel_id: &str) -> Result<()> {
        let method = "conversations.join";
        let request = self
            .client
            .post(self.url(method))
            .json(&serde_json::json!({ "channel": channel_id }));
        self.call::<Empty>(method, request).await?;
        Ok(())
    }
}
