//! Keyless Google Translate web endpoint (`translate_a/single?client=gtx`).
//!
//! Source language is auto-detected. The text travels as a form body so long
//! messages never hit URL length limits. The response is a nested JSON array;
//! the translated segments live at `[0][*][0]` and are concatenated.

use async_trait::async_trait;
use polyglot_core::{config::GoogleWebConfig, error::TranslationError, traits::Translator};
use serde_json::Value;
use tracing::debug;

use crate::classify::{classify_status, classify_transport_error};
use crate::USER_AGENT;

/// Google Translate via the public web endpoint.
pub struct GoogleWebProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleWebProvider {
    /// Create from config values.
    pub fn from_config(config: &GoogleWebConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn build_request(&self, text: &str, target: &str) -> reqwest::RequestBuilder {
        self.client
            .post(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("client", "gtx"), ("sl", "auto"), ("tl", target), ("dt", "t")])
            .form(&[("q", text)])
    }
}

/// Map our language codes onto the ones Google expects.
pub(crate) fn google_language_code(code: &str) -> &str {
    match code {
        "zh" => "zh-CN",
        "zh-tw" => "zh-TW",
        other => other,
    }
}

/// Extract the translation from a gtx response body.
pub(crate) fn parse_response(json: &Value) -> Result<String, TranslationError> {
    let segments = json.get(0).and_then(Value::as_array).ok_or_else(|| {
        TranslationError::ServiceUnavailable("unexpected response: missing segments".into())
    })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translation.trim().is_empty() {
        return Err(TranslationError::EmptyResult);
    }
    Ok(translation)
}

#[async_trait]
impl Translator for GoogleWebProvider {
    fn name(&self) -> &str {
        "google-web"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let target = google_language_code(target_lang);
        debug!("google-web: POST {} tl={target} chars={}", self.base_url, text.chars().count());

        let resp = self
            .build_request(text, target)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        parse_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_concatenates_segments() {
        let body = json!([
            [
                ["Hola. ", "Hello. ", null, null, 10],
                ["¿Cómo estás?", "How are you?", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_response(&body).unwrap(), "Hola. ¿Cómo estás?");
    }

    #[test]
    fn test_parse_skips_non_text_segments() {
        let body = json!([[["Bonjour", "Hello"], [null, null, "bon-zhoor"]], null, "en"]);
        assert_eq!(parse_response(&body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_missing_segments() {
        let err = parse_response(&json!({"error": "nope"})).unwrap_err();
        assert!(matches!(err, TranslationError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_parse_blank_translation_is_empty_result() {
        let body = json!([[["  ", "Hello"]], null, "en"]);
        assert_eq!(parse_response(&body), Err(TranslationError::EmptyResult));
    }

    #[test]
    fn test_text_is_sent_in_form_body() {
        let provider = GoogleWebProvider::from_config(&GoogleWebConfig::default());
        let long_text = "palabra ".repeat(1_000);
        let request = provider.build_request(&long_text, "es").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        let query = request.url().query().unwrap_or_default();
        assert!(query.contains("tl=es"));
        assert!(!query.contains("q="));
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert!(body.starts_with(b"q=palabra"));
        assert!(body.len() > 8_000);
    }

    #[test]
    fn test_language_code_mapping() {
        assert_eq!(google_language_code("zh"), "zh-CN");
        assert_eq!(google_language_code("zh-tw"), "zh-TW");
        assert_eq!(google_language_code("es"), "es");
    }
}
