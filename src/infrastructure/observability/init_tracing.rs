use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::application::services::RedeliveryPolicy;
use crate::presentation::config::StoreProvider;

use super::TracingConfig;

/// What the worker is wired to, logged once the subscriber is up.
#[derive(Debug, Clone, Copy)]
pub struct WorkerProfile<'a> {
    pub queue_name: &'a str,
    pub consumer_tag: &'a str,
    pub store: StoreProvider,
    pub redelivery: RedeliveryPolicy,
}

/// Filter used when `RUST_LOG` is unset. Broker and pool internals stay at
/// warn so per-frame chatter does not drown the job spans.
pub fn default_directives(level: &str) -> String {
    format!("{},audio_digest=debug,lapin=warn,sqlx=warn", level)
}

/// Install the global subscriber and announce the worker wiring.
pub fn init_tracing(config: TracingConfig, worker: &WorkerProfile<'_>) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json().flatten_event(true))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()?;
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        queue = worker.queue_name,
        consumer_tag = worker.consumer_tag,
        store = ?worker.store,
        redelivery = ?worker.redelivery,
        "Worker initialized"
    );
    if worker.redelivery == RedeliveryPolicy::Reprocess {
        tracing::warn!("Redelivered terminal jobs will be rejected instead of skipped");
    }
    Ok(())
}
