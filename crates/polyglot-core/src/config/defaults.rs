pub(super) fn default_name() -> String {
    "polyglot".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_true() -> bool {
    true
}
pub(super) fn default_provider() -> String {
    "google-web".to_string()
}
pub(super) fn default_google_web_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}
pub(super) fn default_google_cloud_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}
pub(super) fn default_cache_duration() -> u64 {
    60
}
pub(super) fn default_timeout_ms() -> u64 {
    15_000
}
pub(super) fn default_max_retries() -> u32 {
    2
}
pub(super) fn default_min_text_length() -> usize {
    2
}
pub(super) fn default_retry_backoff_ms() -> u64 {
    2_000
}
pub(super) fn default_sweep_interval() -> u64 {
    300
}
pub(super) fn default_api_host() -> String {
    "0.0.0.0".to_string()
}
pub(super) fn default_api_port() -> u16 {
    5000
}
