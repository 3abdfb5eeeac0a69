use async_trait::async_trait;

use crate::domain::JobDescriptor;

#[async_trait]
pub trait JobPublisher: Send + Sync {
    async fn publish(&self, descriptor: &JobDescriptor) -> Result<(), QueueError>;
}

/// One message held by a consumer until it is acknowledged or rejected.
#[async_trait]
pub trait JobDelivery: Send + Sync {
    fn payload(&self) -> &[u8];

    async fn ack(&self) -> Result<(), QueueError>;

    /// Rejects without requeueing.
    async fn reject(&self) -> Result<(), QueueError>;
}

#[async_trait]
pub trait JobSource: Send {
    /// Next delivery, or `None` once the source is closed.
    async fn next_delivery(&mut self) -> Option<Result<Box<dyn JobDelivery>, QueueError>>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("publish failed: {0}")]
    PublishFailed(String),
    #[error("consume failed: {0}")]
    ConsumeFailed(String),
    #[error("acknowledgement failed: {0}")]
    AcknowledgeFailed(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}
