use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reaction-add event delivered by a channel.
///
/// Message content is not carried here; reactions arrive without the message
/// body, so the orchestrator resolves it through [`crate::traits::Channel::fetch_text`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub id: Uuid,
    /// Channel name (e.g. "discord").
    pub channel: String,
    /// Platform-specific ID of the reacting user.
    pub actor_id: String,
    /// Human-readable actor name.
    pub actor_name: Option<String>,
    /// Whether the reacting actor is an automated account.
    #[serde(default)]
    pub actor_is_bot: bool,
    /// The raw reaction symbol (unicode emoji).
    pub trigger: String,
    /// Platform-specific ID of the reacted-to message.
    pub message_id: String,
    /// Platform-specific target for routing the reply (e.g. Discord channel id).
    pub reply_target: String,
    pub timestamp: DateTime<Utc>,
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    /// Platform-specific target for routing (e.g. Discord channel id).
    pub reply_target: String,
    /// When set, the message is delivered as a reply to this message id.
    #[serde(default)]
    pub reply_to: Option<String>,
}

impl OutgoingMessage {
    /// A reply to the message an event was raised on.
    pub fn reply(event: &ReactionEvent, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reply_target: event.reply_target.clone(),
            reply_to: Some(event.message_id.clone()),
        }
    }

    /// The same content as a plain message in the same channel.
    pub fn without_reference(&self) -> Self {
        Self {
            text: self.text.clone(),
            reply_target: self.reply_target.clone(),
            reply_to: None,
        }
    }
}
