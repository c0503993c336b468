mod api;
mod gateway;

use clap::{Parser, Subcommand};
use polyglot_channels::DiscordChannel;
use polyglot_core::{
    config::{self, BotConfig},
    filter::ContentFilter,
    languages::{language_name, supported_languages},
    traits::{Channel, Translator},
};
use polyglot_providers::{GoogleCloudProvider, GoogleWebProvider};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Parser)]
#[command(
    name = "polyglot",
    version,
    about = "Polyglot — react with a flag, get a translation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "POLYGLOT_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check configuration and provider setup.
    Status,
    /// List supported flag reactions.
    Languages,
    /// Translate text once, through the same filter and retry policy as the bot.
    Translate {
        /// Target language code (e.g. "es", "ja", "zh-tw").
        lang: String,
        /// The text to translate.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let bootstrap_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let cfg = load_config(&cli.config, bootstrap_filter, std::io::stderr)?;
    let _log_guard = init_logging(&cfg.bot);

    match cli.command {
        Commands::Start => {
            cfg.validate()?;

            let translator = build_translator(&cfg)?;

            if !cfg.discord.enabled {
                anyhow::bail!("No channels enabled. Enable [discord] in config.toml.");
            }
            if cfg.discord.bot_token.trim().is_empty() {
                anyhow::bail!(
                    "Discord is enabled but bot_token is empty. \
                     Set it in config.toml or DISCORD_BOT_TOKEN env var."
                );
            }
            let channel: Arc<dyn Channel> = Arc::new(DiscordChannel::new(cfg.discord.clone()));

            println!("Polyglot — Starting bot...");
            let gw = Arc::new(gateway::Gateway::new(
                channel,
                translator,
                cfg.translation.clone(),
                cfg.api.clone(),
            ));
            gw.run().await?;
        }
        Commands::Status => {
            println!("Polyglot — Status Check\n");
            println!("Config: {}", cli.config);
            match cfg.validate() {
                Ok(()) => println!("Config valid: yes"),
                Err(e) => println!("Config valid: no ({e})"),
            }
            println!("Provider: {}", cfg.provider.default);
            if cfg.provider.default == "google-cloud" {
                println!(
                    "  api key: {}",
                    if cfg.provider.google_cloud.api_key.is_empty() {
                        "missing"
                    } else {
                        "configured"
                    }
                );
            }
            println!();

            println!(
                "  discord: {}",
                if cfg.discord.enabled && !cfg.discord.bot_token.is_empty() {
                    "configured"
                } else if cfg.discord.enabled {
                    "enabled but missing bot_token"
                } else {
                    "disabled"
                }
            );
            println!(
                "  status api: {}",
                if cfg.api.enabled {
                    format!("{}:{}", cfg.api.host, cfg.api.port)
                } else {
                    "disabled".to_string()
                }
            );
            let t = &cfg.translation;
            println!(
                "  cache {}s | timeout {}ms | retries {} | backoff {}ms | min length {}",
                t.cache_duration_secs,
                t.timeout_ms,
                t.max_retries,
                t.retry_backoff_ms,
                t.min_text_length
            );
        }
        Commands::Languages => {
            let languages = supported_languages();
            for entry in &languages {
                println!("{}  {:<6} {}", entry.emoji, entry.code, entry.name);
            }
            println!("\n{} flag reactions supported", languages.len());
        }
        Commands::Translate { lang, text } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: polyglot translate <lang> <text>");
            }
            cfg.validate()?;

            let raw = text.join(" ");
            let filter = ContentFilter::new(cfg.translation.min_text_length);
            let cleaned = filter
                .eligible_text(Some(raw.as_str()))
                .map_err(|reason| anyhow::anyhow!("not translatable: {reason}"))?;

            let invoker = gateway::TranslationInvoker::new(
                build_translator(&cfg)?,
                gateway::RetryPolicy::from(&cfg.translation),
            );
            let translated = invoker
                .translate(&cleaned, &lang)
                .await
                .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;
            println!("[{}] {translated}", language_name(&lang));
        }
    }

    Ok(())
}

/// Load the config under a scoped subscriber, so warnings raised while
/// loading are visible before the configured logger exists.
fn load_config<W>(path: &str, filter: EnvFilter, writer: W) -> anyhow::Result<config::Config>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    let cfg = tracing::subscriber::with_default(bootstrap, || config::load(path))?;
    Ok(cfg)
}

/// Console logging, plus a daily-rotated file when `bot.log_dir` is set.
///
/// `RUST_LOG` wins over the configured level.
fn init_logging(bot: &BotConfig) -> Option<WorkerGuard> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&bot.log_level))
    };

    if bot.log_dir.is_empty() {
        tracing_subscriber::fmt().with_env_filter(filter()).init();
        return None;
    }

    let appender = tracing_appender::rolling::daily(&bot.log_dir, "polyglot.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Some(guard)
}

/// Build the configured translation provider.
fn build_translator(cfg: &config::Config) -> anyhow::Result<Arc<dyn Translator>> {
    match cfg.provider.default.as_str() {
        "google-web" => Ok(Arc::new(GoogleWebProvider::from_config(
            &cfg.provider.google_web,
        ))),
        "google-cloud" => Ok(Arc::new(GoogleCloudProvider::from_config(
            &cfg.provider.google_cloud,
        )?)),
        other => anyhow::bail!("unsupported provider: {other}"),
    }
}
