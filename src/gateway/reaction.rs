//! Reaction orchestrator — one flag reaction in, at most one reply out.
//!
//! Per event: bot check, trigger lookup, cache reservation, message
//! resolution, content filter, translation, reply. Every path that gives up
//! after reserving releases the key so a later reaction can retry.

use super::Gateway;
use polyglot_core::{
    cache::CacheKey,
    error::TranslationError,
    filter::Ineligible,
    languages::{language_for_trigger, language_name},
    message::{OutgoingMessage, ReactionEvent},
};
use tracing::{debug, error, info, warn};

/// Longest reply the chat platform accepts, in characters.
pub(super) const MAX_REPLY_CHARS: usize = 2000;

/// Why an event ended without a translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Skip {
    BotActor,
    UnsupportedTrigger,
    Duplicate,
    Unresolved,
    Ineligible(Ineligible),
}

/// Terminal state of one reaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Outcome {
    Skipped(Skip),
    Translated,
    Failed(TranslationError),
}

/// Build the success reply. The translation is cut so the whole reply fits.
///
/// Backticks in the translation are followed by a zero-width space so they
/// can never close the code block early.
pub(super) fn format_reply(language: &str, trigger: &str, translation: &str) -> String {
    let header = format!("🌐 **Translation to {language}** {trigger}");
    let overhead = header.chars().count() + "\n```\n".len() + "\n```".len();
    let budget = MAX_REPLY_CHARS.saturating_sub(overhead);

    let escaped = translation.replace('`', "`\u{200B}");
    let body = match escaped.char_indices().nth(budget) {
        Some((end, _)) => &escaped[..end],
        None => escaped.as_str(),
    };
    format!("{header}\n```\n{body}\n```")
}

impl Gateway {
    /// Handle one reaction event end to end. Never fails upward.
    pub(super) async fn handle_reaction(&self, event: ReactionEvent) -> Outcome {
        if event.actor_is_bot {
            return Outcome::Skipped(Skip::BotActor);
        }

        let Some(lang) = language_for_trigger(&event.trigger) else {
            debug!("ignoring unsupported reaction {}", event.trigger);
            return Outcome::Skipped(Skip::UnsupportedTrigger);
        };

        info!(
            "reaction {} ({lang}) on message {} by {}",
            event.trigger,
            event.message_id,
            event.actor_name.as_deref().unwrap_or(&event.actor_id)
        );

        let key = CacheKey::new(&event.message_id, &event.trigger);
        let Some(reservation) = self.cache.try_reserve(&key) else {
            self.stats.record_duplicate();
            info!("duplicate prevented for {key}");
            return Outcome::Skipped(Skip::Duplicate);
        };

        let raw = match self.channel.fetch_text(&event).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not resolve message {}: {e}", event.message_id);
                self.cache.release(reservation);
                return Outcome::Skipped(Skip::Unresolved);
            }
        };

        let text = match self.filter.eligible_text(raw.as_deref()) {
            Ok(text) => text,
            Err(reason) => {
                info!("message {} not translated: {reason}", event.message_id);
                self.cache.release(reservation);
                return Outcome::Skipped(Skip::Ineligible(reason));
            }
        };

        let result = match self.invoker.translate(&text, lang).await {
            Ok(translated) => self.deliver_translation(&event, lang, &translated).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.cache.mark_completed(reservation);
                self.stats.record_translation();
                Outcome::Translated
            }
            Err(e) => {
                self.stats.record_error();
                warn!(
                    "translation of message {} to {lang} failed [{}]: {e}",
                    event.message_id,
                    e.kind()
                );
                self.notify_failure(&event, &e).await;
                self.cache.release(reservation);
                Outcome::Failed(e)
            }
        }
    }

    /// Send the translation as a reply, falling back to a plain message.
    async fn deliver_translation(
        &self,
        event: &ReactionEvent,
        lang: &str,
        translated: &str,
    ) -> Result<(), TranslationError> {
        let text = format_reply(&language_name(lang), &event.trigger, translated);
        let reply = OutgoingMessage::reply(event, text);

        match self.channel.send(reply.clone()).await {
            Ok(()) => {
                info!("translation to {lang} sent for message {}", event.message_id);
                Ok(())
            }
            Err(e) => {
                warn!("reply to {} failed ({e}), sending without reference", event.message_id);
                self.channel
                    .send(reply.without_reference())
                    .await
                    .map(|()| info!("translation to {lang} sent via fallback for {}", event.message_id))
                    .map_err(|e| TranslationError::DeliveryFailed(e.to_string()))
            }
        }
    }

    /// Tell the user, briefly, that the translation did not happen.
    async fn notify_failure(&self, event: &ReactionEvent, err: &TranslationError) {
        let reply = OutgoingMessage::reply(event, format!("❌ {}", err.user_message()));
        if let Err(e) = self.channel.send(reply).await {
            error!("failed to deliver error notice for {}: {e}", event.message_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reply_layout() {
        let reply = format_reply("Spanish", "🇪🇸", "Hola");
        assert_eq!(reply, "🌐 **Translation to Spanish** 🇪🇸\n```\nHola\n```");
    }

    #[test]
    fn test_format_reply_fits_limit() {
        let long = "ü".repeat(5000);
        let reply = format_reply("German", "🇩🇪", &long);
        assert!(reply.chars().count() <= MAX_REPLY_CHARS);
        assert!(reply.ends_with("\n```"));
    }

    #[test]
    fn test_format_reply_neutralizes_code_fences() {
        let reply = format_reply("English", "🇬🇧", "run ```rm -rf``` now");
        assert_eq!(reply.matches("```").count(), 2);
        assert!(reply.starts_with("🌐 **Translation to English** 🇬🇧\n```\n"));
        assert!(reply.ends_with("now\n```"));
    }

    #[test]
    fn test_format_reply_escaped_body_fits_limit() {
        let reply = format_reply("English", "🇬🇧", &"`".repeat(3000));
        assert!(reply.chars().count() <= MAX_REPLY_CHARS);
        assert_eq!(reply.matches("```").count(), 2);
    }
}
