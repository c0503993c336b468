//! Content filter — decides whether a message is worth translating.
//!
//! Rules run in order and stop at the first failure:
//! - absent or blank text is rejected
//! - text shorter than the minimum length is rejected
//! - URLs, mentions, custom emoji, code spans, spoilers and pictographic
//!   emoji are stripped, whitespace is collapsed
//! - the cleaned text must still meet the minimum length
//! - the cleaned text must contain at least one letter from a known script
//!
//! The filter is pure: no I/O, no state, same answer for the same input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Why a message was judged not worth translating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligible {
    NoContent,
    TooShort,
    NothingAfterFiltering,
    NoRecognizableWords,
}

impl Ineligible {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoContent => "no content",
            Self::TooShort => "too short",
            Self::NothingAfterFiltering => "no translatable content after filtering",
            Self::NoRecognizableWords => "no recognizable words",
        }
    }
}

impl fmt::Display for Ineligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

// Code spans go first so URLs or mentions inside them disappear with the span.
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```|`[^`]+`").unwrap());
static SPOILER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\|\|.*?\|\|").unwrap());
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").unwrap());
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?:@[!&]?|#)\d+>").unwrap());
static CUSTOM_EMOJI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<a?:\w+:\d+>").unwrap());
static PICTOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{1F000}-\x{1FAFF}\x{2600}-\x{27BF}\x{2B00}-\x{2BFF}\x{FE00}-\x{FE0F}\x{200D}\x{20E3}]",
    )
    .unwrap()
});
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Stateless eligibility check parameterized by the minimum text length.
#[derive(Debug, Clone, Copy)]
pub struct ContentFilter {
    min_len: usize,
}

impl ContentFilter {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Return the cleaned text to translate, or the reason the message is ineligible.
    pub fn eligible_text(&self, raw: Option<&str>) -> Result<String, Ineligible> {
        let trimmed = match raw.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(Ineligible::NoContent),
        };

        if trimmed.chars().count() < self.min_len {
            return Err(Ineligible::TooShort);
        }

        let cleaned = strip_untranslatable(trimmed);
        if cleaned.chars().count() < self.min_len {
            return Err(Ineligible::NothingAfterFiltering);
        }

        if !cleaned.chars().any(is_word_char) {
            return Err(Ineligible::NoRecognizableWords);
        }

        Ok(cleaned)
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Remove every non-translatable token and normalize whitespace.
pub fn strip_untranslatable(text: &str) -> String {
    let mut out = text.to_string();
    for re in [&*CODE, &*SPOILER, &*URL, &*MENTION, &*CUSTOM_EMOJI, &*PICTOGRAPH] {
        out = re.replace_all(&out, " ").into_owned();
    }
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Whether `c` is a letter in one of the scripts we know how to translate.
pub fn is_word_char(c: char) -> bool {
    matches!(c,
        'a'..='z' | 'A'..='Z'
        // Latin-1 letters (skipping × and ÷), Latin Extended-A/B
        | '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' | '\u{00F8}'..='\u{024F}'
        // Greek, Cyrillic, Armenian, Hebrew, Arabic
        | '\u{0370}'..='\u{03FF}' | '\u{0400}'..='\u{04FF}' | '\u{0530}'..='\u{058F}'
        | '\u{0590}'..='\u{05FF}' | '\u{0600}'..='\u{06FF}'
        // Thaana, Indic scripts, Sinhala, Thai, Lao, Tibetan, Myanmar, Georgian
        | '\u{0780}'..='\u{07BF}' | '\u{0900}'..='\u{0DFF}' | '\u{0E00}'..='\u{0EFF}'
        | '\u{0F00}'..='\u{0FFF}' | '\u{1000}'..='\u{109F}' | '\u{10A0}'..='\u{10FF}'
        // Hangul Jamo, Ethiopic, Khmer, Mongolian
        | '\u{1100}'..='\u{11FF}' | '\u{1200}'..='\u{137F}' | '\u{1780}'..='\u{17FF}'
        | '\u{1800}'..='\u{18AF}'
        // Latin Extended Additional (Vietnamese)
        | '\u{1E00}'..='\u{1EFF}'
        // Kana, CJK, Hangul syllables
        | '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}' | '\u{AC00}'..='\u{D7AF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Result<String, Ineligible> {
        ContentFilter::default().eligible_text(Some(text))
    }

    #[test]
    fn test_absent_and_blank_text() {
        let filter = ContentFilter::default();
        assert_eq!(filter.eligible_text(None), Err(Ineligible::NoContent));
        assert_eq!(check(""), Err(Ineligible::NoContent));
        assert_eq!(check("   \n\t "), Err(Ineligible::NoContent));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(check("a"), Err(Ineligible::TooShort));
        assert_eq!(check("  a  "), Err(Ineligible::TooShort));
    }

    #[test]
    fn test_plain_text_passes_unchanged() {
        assert_eq!(check("Hello world").unwrap(), "Hello world");
    }

    #[test]
    fn test_url_only_is_rejected() {
        assert_eq!(
            check("https://example.com"),
            Err(Ineligible::NothingAfterFiltering)
        );
        assert_eq!(
            check("see https://example.com/a?b=c"),
            Ok("see".to_string())
        );
    }

    #[test]
    fn test_emoji_only_is_rejected() {
        assert!(check("🎉🎉").is_err());
        assert!(check("❤️❤️").is_err());
    }

    #[test]
    fn test_numbers_only_have_no_words() {
        assert_eq!(check("12345 !!"), Err(Ineligible::NoRecognizableWords));
    }

    #[test]
    fn test_mentions_and_custom_emoji_stripped() {
        let cleaned = check("<@123456> hola <@!42> <#99> <@&7> amigo <:pepe:123> <a:dance:456>")
            .unwrap();
        assert_eq!(cleaned, "hola amigo");
    }

    #[test]
    fn test_code_and_spoilers_stripped() {
        let cleaned = check("look ```fn main() {}``` at `x` this ||secret|| now").unwrap();
        assert_eq!(cleaned, "look at this now");
    }

    #[test]
    fn test_code_block_only_is_rejected() {
        assert_eq!(
            check("```\nlet x = 1;\n```"),
            Err(Ineligible::NothingAfterFiltering)
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(check("  guten \n\n  morgen\t!  ").unwrap(), "guten morgen !");
    }

    #[test]
    fn test_non_latin_scripts_count_as_words() {
        assert!(check("привет").is_ok());
        assert!(check("こんにちは").is_ok());
        assert!(check("你好").is_ok());
        assert!(check("שלום").is_ok());
        assert!(check("مرحبا").is_ok());
        assert!(check("안녕하세요").is_ok());
    }

    #[test]
    fn test_min_length_is_configurable() {
        let filter = ContentFilter::new(10);
        assert_eq!(filter.eligible_text(Some("short")), Err(Ineligible::TooShort));
        assert_eq!(
            filter.eligible_text(Some("hey https://example.com/long")),
            Err(Ineligible::NothingAfterFiltering)
        );
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let first = check("Hello <@1> world");
        let second = check("Hello <@1> world");
        assert_eq!(first, second);
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(Ineligible::NoContent.to_string(), "no content");
        assert_eq!(
            Ineligible::NothingAfterFiltering.reason(),
            "no translatable content after filtering"
        );
    }
}
