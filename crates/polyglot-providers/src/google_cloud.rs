//! Google Cloud Translation API v2 provider.
//!
//! Requires an API key (`provider.google_cloud.api_key` or the
//! `GOOGLE_TRANSLATE_API_KEY` environment variable).

use async_trait::async_trait;
use polyglot_core::{
    config::GoogleCloudConfig,
    error::{PolyglotError, TranslationError},
    traits::Translator,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify_status, classify_transport_error};
use crate::google_web::google_language_code;

/// Google Cloud Translation v2.
pub struct GoogleCloudProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl GoogleCloudProvider {
    /// Create from config values. An empty API key is a config error.
    pub fn from_config(config: &GoogleCloudConfig) -> Result<Self, PolyglotError> {
        if config.api_key.trim().is_empty() {
            return Err(PolyglotError::Config(
                "google-cloud provider selected but provider.google_cloud.api_key is empty \
                 (or set GOOGLE_TRANSLATE_API_KEY)"
                    .into(),
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.trim().to_string(),
        })
    }
}

fn extract_translation(resp: TranslateResponse) -> Result<String, TranslationError> {
    resp.data
        .and_then(|d| d.translations.into_iter().next())
        .and_then(|t| t.translated_text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(TranslationError::EmptyResult)
}

#[async_trait]
impl Translator for GoogleCloudProvider {
    fn name(&self) -> &str {
        "google-cloud"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let body = TranslateRequest {
            q: [text],
            target: google_language_code(target_lang),
            format: "text",
        };
        debug!("google-cloud: POST {} target={}", self.base_url, body.target);

        let resp = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, &text));
        }

        let parsed: TranslateResponse = resp
            .json()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        extract_translation(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_config_error() {
        let cfg = GoogleCloudConfig {
            api_key: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            GoogleCloudProvider::from_config(&cfg),
            Err(PolyglotError::Config(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = TranslateRequest {
            q: ["Hello"],
            target: "fr",
            format: "text",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["q"][0], "Hello");
        assert_eq!(json["target"], "fr");
        assert_eq!(json["format"], "text");
    }

    #[test]
    fn test_extract_translation() {
        let resp: TranslateResponse = serde_json::from_str(
            r#"{"data":{"translations":[{"translatedText":"Bonjour","detectedSourceLanguage":"en"}]}}"#,
        )
        .unwrap();
        assert_eq!(extract_translation(resp).unwrap(), "Bonjour");
    }

    #[test]
    fn test_extract_missing_translation_is_empty_result() {
        let resp: TranslateResponse =
            serde_json::from_str(r#"{"data":{"translations":[]}}"#).unwrap();
        assert_eq!(extract_translation(resp), Err(TranslationError::EmptyResult));

        let resp: TranslateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_translation(resp), Err(TranslationError::EmptyResult));
    }
}
