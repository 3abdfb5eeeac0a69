use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;
use crate::infrastructure::observability::redact_url;
use crate::presentation::config::DatabaseSettings;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Connects to the job store, retrying while the database comes up.
#[instrument(skip_all, fields(database = %redact_url(&settings.url)))]
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, RepositoryError> {
    let attempts = settings.connect_attempts.max(1);
    let mut delay = Duration::from_millis(500);

    for attempt in 1..=attempts {
        let result = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&settings.url)
            .await;

        match result {
            Ok(pool) => {
                info!(attempt, max_connections = settings.max_connections, "Job store pool ready");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                warn!(
                    error = %e,
                    attempt,
                    attempts,
                    delay_ms = delay.as_millis(),
                    "Job store not reachable, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(MAX_RETRY_DELAY);
            }
            Err(e) => {
                return Err(RepositoryError::ConnectionFailed(format!(
                    "gave up after {} attempts: {}",
                    attempts, e
                )));
            }
        }
    }

    Err(RepositoryError::ConnectionFailed(
        "no connection attempt was made".to_string(),
    ))
}

/// Applies the embedded `audio_processing` schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(format!("migration: {}", e)))?;
    info!("Job store migrations applied");
    Ok(())
}
