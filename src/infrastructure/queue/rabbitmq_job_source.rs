use async_trait::async_trait;
use futures::StreamExt;
use lapin::message::Delivery;
use lapin::options::{BasicAckOptions, BasicConsumeOptions, BasicQosOptions, BasicRejectOptions};
use lapin::types::FieldTable;
use lapin::{Channel, Consumer};

use crate::application::ports::{JobDelivery, JobSource, QueueError};
use crate::presentation::config::RabbitMqSettings;

use super::rabbitmq_connection::declare_durable_queue;

/// One unacknowledged message per consumer: a worker holds a single job.
const PREFETCH_COUNT: u16 = 1;

pub struct RabbitMqJobSource {
    consumer: Consumer,
}

impl RabbitMqJobSource {
    pub async fn subscribe(channel: &Channel, settings: &RabbitMqSettings) -> Result<Self, QueueError> {
        declare_durable_queue(channel, &settings.queue_name).await?;

        channel
            .basic_qos(PREFETCH_COUNT, BasicQosOptions::default())
            .await
            .map_err(|e| QueueError::ConsumeFailed(format!("qos: {}", e)))?;

        let consumer = channel
            .basic_consume(
                &settings.queue_name,
                &settings.consumer_tag,
                BasicConsumeOptions {
                    no_ack: false,
                    ..BasicConsumeOptions::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| QueueError::ConsumeFailed(e.to_string()))?;

        tracing::info!(queue = %settings.queue_name, "Consumer is listening");
        Ok(Self { consumer })
    }
}

#[async_trait]
impl JobSource for RabbitMqJobSource {
    async fn next_delivery(&mut self) -> Option<Result<Box<dyn JobDelivery>, QueueError>> {
        let next = self.consumer.next().await?;
        Some(
            next.map(|delivery| {
                if delivery.redelivered {
                    tracing::warn!(delivery_tag = delivery.delivery_tag, "Message redelivered");
                }
                Box::new(RabbitMqDelivery(delivery)) as Box<dyn JobDelivery>
            })
            .map_err(|e| QueueError::ConsumeFailed(e.to_string())),
        )
    }
}

struct RabbitMqDelivery(Delivery);

#[async_trait]
impl JobDelivery for RabbitMqDelivery {
    fn payload(&self) -> &[u8] {
        &self.0.data
    }

    async fn ack(&self) -> Result<(), QueueError> {
        self.0
            .acker
            .ack(BasicAckOptions::default())
            .await
            .map_err(|e| QueueError::AcknowledgeFailed(e.to_string()))
    }

    async fn reject(&self) -> Result<(), QueueError> {
        self.0
            .acker
            .reject(BasicRejectOptions { requeue: false })
            .await
            .map_err(|e| QueueError::AcknowledgeFailed(e.to_string()))
    }
}
