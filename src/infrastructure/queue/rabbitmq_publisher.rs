use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::{BasicProperties, Channel};

use crate::application::ports::{JobPublisher, QueueError};
use crate::domain::JobDescriptor;

use super::rabbitmq_connection::declare_durable_queue;

const PERSISTENT_DELIVERY_MODE: u8 = 2;
const DEFAULT_EXCHANGE: &str = "";

pub struct RabbitMqJobPublisher {
    channel: Channel,
    queue_name: String,
}

impl RabbitMqJobPublisher {
    pub async fn new(channel: Channel, queue_name: impl Into<String>) -> Result<Self, QueueError> {
        let queue_name = queue_name.into();
        declare_durable_queue(&channel, &queue_name).await?;
        Ok(Self {
            channel,
            queue_name,
        })
    }
}

#[async_trait]
impl JobPublisher for RabbitMqJobPublisher {
    async fn publish(&self, descriptor: &JobDescriptor) -> Result<(), QueueError> {
        let payload = descriptor
            .to_vec()
            .map_err(|e| QueueError::Serialization(e.to_string()))?;

        let properties = BasicProperties::default()
            .with_delivery_mode(PERSISTENT_DELIVERY_MODE)
            .with_content_type("application/json".into());

        self.channel
            .basic_publish(
                DEFAULT_EXCHANGE,
                &self.queue_name,
                BasicPublishOptions::default(),
                &payload,
                properties,
            )
            .await
            .map_err(|e| QueueError::PublishFailed(e.to_string()))?
            .await
            .map_err(|e| QueueError::PublishFailed(e.to_string()))?;

        tracing::debug!(
            audio_id = %descriptor.audio_id,
            queue = %self.queue_name,
            "Job descriptor published"
        );
        Ok(())
    }
}
