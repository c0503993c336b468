use crate::{
    error::{PolyglotError, TranslationError},
    message::{OutgoingMessage, ReactionEvent},
};
use async_trait::async_trait;

/// Translation provider trait — text and target language in, translated text out.
///
/// Every backend (Google web endpoint, Google Cloud API, test stubs)
/// implements this trait. Implementations classify their own failures into
/// [`TranslationError`]; callers never look at provider wording.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Translate `text` into `target_lang` (ISO-639-like code, source auto-detected).
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError>;
}

/// Chat platform trait — where reactions come from and replies go.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for reaction events.
    /// Returns a receiver that yields events as they arrive.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<ReactionEvent>, PolyglotError>;

    /// Resolve the text content of the message an event refers to.
    ///
    /// Returns `Ok(None)` when the message exists but carries no text.
    async fn fetch_text(&self, event: &ReactionEvent) -> Result<Option<String>, PolyglotError>;

    /// Send a message. Delivered as a reply when `reply_to` is set.
    async fn send(&self, message: OutgoingMessage) -> Result<(), PolyglotError>;

    /// Whether the channel is currently connected to its platform.
    fn is_connected(&self) -> bool {
        true
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), PolyglotError>;
}
