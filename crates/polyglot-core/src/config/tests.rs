use super::*;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_translation_defaults() {
    let t = TranslationConfig::default();
    assert_eq!(t.cache_duration_secs, 60);
    assert_eq!(t.timeout_ms, 15_000);
    assert_eq!(t.max_retries, 2);
    assert_eq!(t.min_text_length, 2);
    assert_eq!(t.retry_backoff_ms, 2_000);
    assert_eq!(t.sweep_interval_secs, 300);
    assert_eq!(t.timeout(), Duration::from_secs(15));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.bot.name, "polyglot");
    assert!(cfg.discord.enabled);
    assert_eq!(cfg.provider.default, "google-web");
    assert_eq!(cfg.api.port, 5000);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_partial_translation_section() {
    let cfg = parse(
        r#"
        [translation]
        cache_duration_secs = 120
        max_retries = 0
    "#,
    )
    .unwrap();
    assert_eq!(cfg.translation.cache_duration_secs, 120);
    assert_eq!(cfg.translation.max_retries, 0);
    assert_eq!(cfg.translation.timeout_ms, 15_000);
}

#[test]
fn test_provider_section_from_toml() {
    let cfg = parse(
        r#"
        [provider]
        default = "google-cloud"

        [provider.google_cloud]
        api_key = "abc"
    "#,
    )
    .unwrap();
    assert_eq!(cfg.provider.default, "google-cloud");
    assert_eq!(cfg.provider.google_cloud.api_key, "abc");
    assert!(cfg.provider.google_cloud.base_url.contains("translate/v2"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse("[translation\ncache = ").unwrap_err();
    assert!(matches!(err, PolyglotError::Config(_)));
}

#[test]
fn test_env_overrides() {
    let mut cfg = Config::default();
    cfg.apply_env_overrides(env(&[
        ("DISCORD_BOT_TOKEN", " tok "),
        ("GOOGLE_TRANSLATE_API_KEY", "key"),
        ("PORT", "8080"),
    ]));
    assert_eq!(cfg.discord.bot_token, "tok");
    assert_eq!(cfg.provider.google_cloud.api_key, "key");
    assert_eq!(cfg.api.port, 8080);
}

#[test]
fn test_env_overrides_ignore_blank_and_invalid() {
    let mut cfg = parse(
        r#"
        [discord]
        bot_token = "from-file"
    "#,
    )
    .unwrap();
    cfg.apply_env_overrides(env(&[("DISCORD_BOT_TOKEN", "  "), ("PORT", "not-a-port")]));
    assert_eq!(cfg.discord.bot_token, "from-file");
    assert_eq!(cfg.api.port, 5000);
}

#[test]
fn test_validate_rejects_zero_values() {
    let mut cfg = Config::default();
    cfg.translation.timeout_ms = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.translation.cache_duration_secs = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.translation.min_text_length = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_rejects_unknown_provider() {
    let mut cfg = Config::default();
    cfg.provider.default = "babelfish".into();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("babelfish"));
}

#[test]
fn test_load_missing_file_falls_back() {
    let cfg = load("/nonexistent/polyglot/config.toml").unwrap();
    assert_eq!(cfg.translation.cache_duration_secs, 60);
}

#[test]
fn test_bundled_example_config_parses() {
    let cfg = parse(include_str!("../../../../config.example.toml")).unwrap();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.translation.cache_duration_secs, 60);
    assert_eq!(cfg.translation.timeout_ms, 15_000);
    assert_eq!(cfg.provider.default, "google-web");
    assert_eq!(cfg.api.port, 5000);
}
