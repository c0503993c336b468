//! Gateway — the event loop connecting the chat channel, the dedup cache and
//! the translation provider.
//!
//! Includes: per-event orchestration, periodic cache sweeping, the status
//! API task, and graceful shutdown.

mod invoker;
mod reaction;
mod sweeper;


pub use invoker::{RetryPolicy, TranslationInvoker};

use polyglot_core::{
    cache::DedupCache,
    config::{ApiConfig, TranslationConfig},
    filter::ContentFilter,
    message::ReactionEvent,
    stats::Stats,
    traits::{Channel, Translator},
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// The central gateway that turns reactions into translated replies.
pub struct Gateway {
    pub(super) channel: Arc<dyn Channel>,
    pub(super) invoker: TranslationInvoker,
    pub(super) cache: DedupCache,
    pub(super) filter: ContentFilter,
    pub(super) stats: Arc<Stats>,
    pub(super) translation_config: TranslationConfig,
    pub(super) api_config: ApiConfig,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channel: Arc<dyn Channel>,
        translator: Arc<dyn Translator>,
        translation_config: TranslationConfig,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            channel,
            invoker: TranslationInvoker::new(translator, RetryPolicy::from(&translation_config)),
            cache: DedupCache::new(translation_config.cache_duration()),
            filter: ContentFilter::new(translation_config.min_text_length),
            stats: Arc::new(Stats::new()),
            translation_config,
            api_config,
        }
    }

    /// Run the main event loop until a shutdown signal arrives.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        let t = &self.translation_config;
        info!(
            "Polyglot gateway running | channel: {} | provider: {} | cache: {}s | timeout: {}ms | retries: {}",
            self.channel.name(),
            self.invoker.provider_name(),
            t.cache_duration_secs,
            t.timeout_ms,
            t.max_retries,
        );

        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;
        info!("Channel started: {}", self.channel.name());

        // Spawn cache sweeper.
        let sweep_cache = self.cache.clone();
        let sweep_stats = self.stats.clone();
        let sweep_interval = self.translation_config.sweep_interval();
        let sweep_handle = tokio::spawn(async move {
            Self::sweep_loop(sweep_cache, sweep_stats, sweep_interval).await;
        });

        // Spawn HTTP status API.
        let api_handle = if self.api_config.enabled {
            let api_cfg = self.api_config.clone();
            let state = crate::api::ApiState {
                channel: self.channel.clone(),
                cache: self.cache.clone(),
                stats: self.stats.clone(),
            };
            Some(tokio::spawn(async move {
                crate::api::serve(api_cfg, state).await;
            }))
        } else {
            None
        };

        // Main event loop with graceful shutdown.
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                event = rx.recv() => match event {
                    Some(event) => {
                        let gw = self.clone();
                        tokio::spawn(async move {
                            gw.dispatch(event).await;
                        });
                    }
                    None => {
                        warn!("{} event stream closed", self.channel.name());
                        break;
                    }
                },
                _ = &mut shutdown => break,
            }
        }

        self.shutdown(&sweep_handle, &api_handle).await;
        Ok(())
    }

    async fn dispatch(&self, event: ReactionEvent) {
        let id = event.id;
        let outcome = self.handle_reaction(event).await;
        debug!("event {id} finished: {outcome:?}");
    }

    /// Graceful shutdown: stop background tasks and the channel.
    async fn shutdown(&self, sweep_handle: &JoinHandle<()>, api_handle: &Option<JoinHandle<()>>) {
        info!("Shutting down...");

        sweep_handle.abort();
        if let Some(h) = api_handle {
            h.abort();
        }

        if let Err(e) = self.channel.stop().await {
            warn!("failed to stop channel {}: {e}", self.channel.name());
        }

        info!(
            "Final {}",
            sweeper::stats_line(&self.stats.snapshot(), self.cache.len())
        );
        info!("Shutdown complete.");
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
