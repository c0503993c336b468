//! Translation invoker — one provider call per attempt, raced against a hard
//! timeout, retried a bounded number of times with a fixed backoff.

use polyglot_core::{config::TranslationConfig, error::TranslationError, traits::Translator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout and retry settings for [`TranslationInvoker`].
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Hard limit for a single provider call.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Constant delay between attempts.
    pub backoff: Duration,
    /// Minimum trimmed length, in characters, of text worth sending.
    pub min_text_length: usize,
}

impl From<&TranslationConfig> for RetryPolicy {
    fn from(cfg: &TranslationConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            max_retries: cfg.max_retries,
            backoff: cfg.retry_backoff(),
            min_text_length: cfg.min_text_length,
        }
    }
}

/// One attempt's worth of input. Built per attempt, dropped when it resolves.
#[derive(Debug, Clone, Copy)]
struct TranslationRequest<'a> {
    text: &'a str,
    target_lang: &'a str,
    attempt: u32,
}

/// Wraps a [`Translator`] with validation, timeout and bounded retries.
pub struct TranslationInvoker {
    translator: Arc<dyn Translator>,
    policy: RetryPolicy,
}

impl TranslationInvoker {
    pub fn new(translator: Arc<dyn Translator>, policy: RetryPolicy) -> Self {
        Self { translator, policy }
    }

    pub fn provider_name(&self) -> &str {
        self.translator.name()
    }

    /// Translate `text` into `target_lang`.
    ///
    /// Performs at most `max_retries + 1` provider calls. Only
    /// [`TranslationError::is_retryable`] failures are retried.
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslationError::InvalidInput("empty text".into()));
        }
        if text.chars().count() < self.policy.min_text_length {
            return Err(TranslationError::InvalidInput("text too short".into()));
        }

        let max_attempts = self.policy.max_retries.saturating_add(1);
        let mut attempt = 1;
        loop {
            let request = TranslationRequest {
                text,
                target_lang,
                attempt,
            };
            match self.attempt(request).await {
                Ok(translated) => return Ok(translated),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        "translation attempt {attempt}/{max_attempts} to {target_lang} failed ({}), retrying in {}ms",
                        e.kind(),
                        self.policy.backoff.as_millis()
                    );
                    tokio::time::sleep(self.policy.backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    if attempt > 1 {
                        warn!("translation to {target_lang} gave up after {attempt} attempts: {e}");
                    }
                    return Err(e);
                }
            }
        }
    }

    async fn attempt(&self, request: TranslationRequest<'_>) -> Result<String, TranslationError> {
        debug!(
            "{}: attempt {} to {} ({} chars)",
            self.translator.name(),
            request.attempt,
            request.target_lang,
            request.text.chars().count()
        );

        let call = self.translator.translate(request.text, request.target_lang);
        let translated = match tokio::time::timeout(self.policy.timeout, call).await {
            Ok(result) => result?,
            Err(_) => return Err(TranslationError::Timeout),
        };

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslationError::EmptyResult);
        }
        // Identical to the input is fine: names and short words often are.
        Ok(translated.to_string())
    }
}
