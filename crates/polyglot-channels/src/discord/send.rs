//! Outbound helpers: ID parsing and message length limits.

use polyglot_core::error::PolyglotError;

/// Discord rejects message content longer than this many characters.
pub const MAX_DISCORD_LEN: usize = 2000;

/// Parse a Discord snowflake. Zero is not a valid ID.
pub(crate) fn parse_snowflake(raw: &str, what: &str) -> Result<u64, PolyglotError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(PolyglotError::Channel(format!(
            "invalid discord {what} id: '{raw}'"
        ))),
        Ok(id) => Ok(id),
    }
}

/// Cut `text` to at most [`MAX_DISCORD_LEN`] characters.
pub fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_DISCORD_LEN) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
