use thiserror::Error;

/// Top-level error type for Polyglot.
#[derive(Debug, Error)]
pub enum PolyglotError {
    /// Error from a translation provider that is not a per-request failure
    /// (construction, credentials).
    #[error("provider error: {0}")]
    Provider(String),

    /// Error from the chat platform.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Classified failure of a single translation request.
///
/// Providers map their transport and HTTP failures into these kinds at the
/// boundary; nothing downstream inspects error wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// No translatable content.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The attempt did not finish within the per-attempt timeout.
    #[error("translation timed out")]
    Timeout,

    /// Network, DNS or connection-class failure, or a provider 5xx.
    #[error("translation service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The provider is throttling us.
    #[error("translation rate limited")]
    RateLimited,

    /// The provider answered but returned no usable text.
    #[error("translation returned an empty result")]
    EmptyResult,

    /// The provider refused the request (unsupported language, bad request).
    #[error("translation rejected: {0}")]
    Rejected(String),

    /// The reply could not be delivered through any path.
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

impl TranslationError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::ServiceUnavailable(_))
    }

    /// Short label used in logs and counters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Timeout => "timeout",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::RateLimited => "rate_limited",
            Self::EmptyResult => "empty_result",
            Self::Rejected(_) => "rejected",
            Self::DeliveryFailed(_) => "delivery_failed",
        }
    }

    /// Non-technical message shown to the user. Never includes provider detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "Translation service is temporarily slow - please try again",
            Self::ServiceUnavailable(_) => "Network connection issue - please try again later",
            Self::RateLimited => "Too many translation requests - please wait a moment",
            Self::Rejected(_) => "Language not supported for this text",
            Self::InvalidInput(_) | Self::EmptyResult => "Message contains no translatable text",
            Self::DeliveryFailed(_) => "Translation temporarily unavailable - please try again",
        }
    }
}
