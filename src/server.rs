// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::services::anagram::handle_anagram;
use crate::services::caesar::handle_rot;
use crate::services::dictionary::Dictionary;
use crate::services::slack::commands::{SlashCommand, SlashCommandPayload, SlashCommandResponse};
use crate::services::slack::events::{EventEnvelope, SlackEvent};
use crate::services::slack::{OutgoingMessage, SlackApi, channel_created_announcement};

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<Dictionary>,
    pub slack: Arc<dyn SlackApi>,
    pub notification_channels: Arc<[String]>,
    verification_token: Arc<SecretString>,
}

impl AppState {
    pub fn new(
        dictionary: Arc<Dictionary>,
        slack: Arc<dyn SlackApi>,
        notification_channels: Vec<String>,
        verification_token: SecretString,
    ) -> Self {
        Self {
            dictionary,
            slack,
            notification_channels: notification_channels.into(),
            verification_token: Arc::new(verification_token),
        }
    }

    fn token_matches(&self, token: Option<&str>) -> bool {
        token == Some(self.verification_token.expose_secret())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/command-endpoint", post(command_endpoint))
        .route("/events-endpoint", post(events_endpoint))
        .with_state(state)
}

/// Bind `addr` and serve until `cancel` fires.
pub async fn serve(addr: SocketAddr, state: AppState, cancel: CancellationToken) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(|e| Error::Server(e.to_string()))
}

async fn command_endpoint(
    State(state): State<AppState>,
    payload: std::result::Result<Form<SlashCommandPayload>, FormRejection>,
) -> Response {
    let Form(payload) = match payload {
        Ok(form) => form,
        Err(e) => {
            error!(error = %e, "slash command parse failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if !state.token_matches(Some(&payload.token)) {
        warn!(command = %payload.command, "slash command token validation failed");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    debug!(
        command = %payload.command,
        user = %payload.user_name,
        channel = %payload.channel_id,
        "slash command received"
    );

    let text = match SlashCommand::parse(&payload.command) {
        Some(SlashCommand::Anagram) => handle_anagram(&payload.text, &state.dictionary),
        Some(SlashCommand::Rot) => handle_rot(&payload.text),
        None => {
            warn!(command = %payload.command, "unknown slash command");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Json(SlashCommandResponse::in_channel(text)).into_response()
}

async fn events_endpoint(State(state): State<AppState>, body: String) -> Response {
    let envelope: EventEnvelope = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(error = %e, "event parse failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if !state.token_matches(envelope.token()) {
        warn!("event token validation failed");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match envelope {
        EventEnvelope::UrlVerification { challenge, .. } => {
            info!("url verification challenge answered");
            ([(header::CONTENT_TYPE, "text/plain")], challenge).into_response()
        }
        EventEnvelope::EventCallback(callback) => {
            dispatch_event(&state, callback.event);
            StatusCode::OK.into_response()
        }
        EventEnvelope::Unknown => {
            debug!("ignoring unknown envelope type");
            StatusCode::OK.into_response()
        }
    }
}

/// Replies are posted from a spawned task so Slack gets its ack right away.
fn dispatch_event(state: &AppState, event: SlackEvent) {
    match event {
        SlackEvent::AppMention(mention) => {
            debug!(channel = %mention.channel, text = %mention.text, "app mention");
            let reply = handle_anagram(&mention.text, &state.dictionary);
            let message = OutgoingMessage::new(mention.channel, reply);
            let slack = Arc::clone(&state.slack);
            tokio::spawn(async move {
                if let Err(e) = slack.post_message(&message).await {
                    error!(error = %e, channel = %message.channel, "failed to post anagram reply");
                }
            });
        }
        SlackEvent::ChannelCreated(created) => {
            info!(channel = %created.channel.name, "channel created");
            let text = channel_created_announcement(&created.channel.name);
            let slack = Arc::clone(&state.slack);
            let targets = Arc::clone(&state.notification_channels);
            tokio::spawn(async move {
                for target in targets.iter() {
                    let message = OutgoingMessage::new(target.as_str(), text.as_str()).with_full_parse();
                    if let Err(e) = slack.post_message(&message).await {
                        error!(error = %e, channel = %target, "failed to announce new channel");
                    }
                }
            });
        }
        SlackEvent::Unknown => debug!("ignoring unhandled event type"),
    }
}
