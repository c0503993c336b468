use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Translation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which provider to use: "google-web" or "google-cloud".
    #[serde(default = "default_provider")]
    pub default: String,
    #[serde(default)]
    pub google_web: GoogleWebConfig,
    #[serde(default)]
    pub google_cloud: GoogleCloudConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default: default_provider(),
            google_web: GoogleWebConfig::default(),
            google_cloud: GoogleCloudConfig::default(),
        }
    }
}

/// Keyless public web endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleWebConfig {
    #[serde(default = "default_google_web_url")]
    pub base_url: String,
}

impl Default for GoogleWebConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_web_url(),
        }
    }
}

/// Google Cloud Translation API v2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleCloudConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_google_cloud_url")]
    pub base_url: String,
}

impl Default for GoogleCloudConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_google_cloud_url(),
        }
    }
}
