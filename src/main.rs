use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use audio_digest::application::services::{AudioJobWorker, AudioPipeline, StrategyRegistry};
use audio_digest::infrastructure::observability::{TracingConfig, WorkerProfile, init_tracing};
use audio_digest::infrastructure::persistence::RepositoryFactory;
use audio_digest::infrastructure::queue::{RabbitMqJobSource, connect_rabbitmq};
use audio_digest::infrastructure::stages::StageProviderFactory;
use audio_digest::infrastructure::storage::HttpAudioStager;
use audio_digest::presentation::{Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment.file_stem()),
        &WorkerProfile {
            queue_name: &settings.rabbitmq.queue_name,
            consumer_tag: &settings.rabbitmq.consumer_tag,
            store: settings.database.provider,
            redelivery: settings.worker.redelivery_policy(),
        },
    )
    .context("Failed to initialize tracing")?;

    let repository = RepositoryFactory::create(&settings.database)
        .await
        .context("Failed to initialize job store")?;

    let stager = Arc::new(
        HttpAudioStager::new(
            PathBuf::from(&settings.staging.audios_folder),
            Duration::from_secs(settings.staging.download_timeout_secs),
        )
        .context("Failed to prepare audio staging folder")?,
    );

    let providers = StageProviderFactory::create(&settings.providers)
        .context("Failed to configure stage providers")?;

    let pipeline = Arc::new(AudioPipeline::new(
        repository,
        stager,
        StrategyRegistry::new(providers),
        settings.worker.redelivery_policy(),
    ));

    let connection = connect_rabbitmq(&settings.rabbitmq.url).await?;
    let channel = connection
        .create_channel()
        .await
        .context("Failed to open RabbitMQ channel")?;
    let source = RabbitMqJobSource::subscribe(&channel, &settings.rabbitmq).await?;

    let worker = AudioJobWorker::new(Box::new(source), pipeline);

    tokio::select! {
        result = worker.run() => {
            if let Err(e) = &result {
                tracing::error!(error = %e, "Consumer stopped");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    if let Err(e) = connection.close(200, "worker shutdown").await {
        tracing::warn!(error = %e, "Failed to close RabbitMQ connection cleanly");
    }

    Ok(())
}
