use std::time::Duration;

use lapin::options::QueueDeclareOptions;
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties};
use tracing::{info, instrument, warn};

use crate::application::ports::QueueError;

const CONNECT_ATTEMPTS: u32 = 5;

#[instrument(skip(url))]
pub async fn connect_rabbitmq(url: &str) -> Result<Connection, QueueError> {
    let mut retries = CONNECT_ATTEMPTS;
    let mut delay = Duration::from_millis(500);

    loop {
        match Connection::connect(url, ConnectionProperties::default()).await {
            Ok(connection) => {
                info!("RabbitMQ connection established");
                return Ok(connection);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis(),
                    "RabbitMQ connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(QueueError::ConnectionFailed(e.to_string())),
        }
    }
}

/// Declares the durable work queue. Producer and consumer both call this so
/// either side may start first.
pub async fn declare_durable_queue(channel: &Channel, queue_name: &str) -> Result<(), QueueError> {
    channel
        .queue_declare(
            queue_name,
            QueueDeclareOptions {
                durable: true,
                ..QueueDeclareOptions::default()
            },
            FieldTable::default(),
        )
        .await
        .map_err(|e| QueueError::ConnectionFailed(format!("queue declare: {}", e)))?;
    Ok(())
}
