use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::application::ports::{JobDelivery, JobPublisher, JobSource, QueueError};
use crate::domain::JobDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Acked(u64),
    Rejected(u64),
}

/// Acks and rejects observed by an in-memory source, in order.
#[derive(Debug, Default)]
pub struct SettlementLog {
    entries: Mutex<Vec<Settlement>>,
}

impl SettlementLog {
    pub async fn entries(&self) -> Vec<Settlement> {
        self.entries.lock().await.clone()
    }

    async fn push(&self, settlement: Settlement) {
        self.entries.lock().await.push(settlement);
    }
}

/// Bounded channel standing in for the broker. Each message goes to exactly
/// one consumer and is never requeued.
pub fn in_memory_queue(capacity: usize) -> (InMemoryJobPublisher, InMemoryJobSource) {
    let (sender, receiver) = mpsc::channel(capacity);
    let publisher = InMemoryJobPublisher { sender };
    let source = InMemoryJobSource {
        receiver,
        next_tag: AtomicU64::new(1),
        settlements: Arc::new(SettlementLog::default()),
    };
    (publisher, source)
}

#[derive(Clone)]
pub struct InMemoryJobPublisher {
    sender: mpsc::Sender<Vec<u8>>,
}

impl InMemoryJobPublisher {
    /// Enqueues bytes as they are, bypassing descriptor serialization.
    pub async fn publish_raw(&self, payload: impl Into<Vec<u8>>) -> Result<(), QueueError> {
        self.sender
            .send(payload.into())
            .await
            .map_err(|_| QueueError::PublishFailed("queue closed".to_string()))
    }
}

#[async_trait]
impl JobPublisher for InMemoryJobPublisher {
    async fn publish(&self, descriptor: &JobDescriptor) -> Result<(), QueueError> {
        let payload = descriptor
            .to_vec()
            .map_err(|e| QueueError::Serialization(e.to_string()))?;
        self.publish_raw(payload).await
    }
}

pub struct InMemoryJobSource {
    receiver: mpsc::Receiver<Vec<u8>>,
    next_tag: AtomicU64,
    settlements: Arc<SettlementLog>,
}

impl InMemoryJobSource {
    pub fn settlements(&self) -> Arc<SettlementLog> {
        Arc::clone(&self.settlements)
    }
}

#[async_trait]
impl JobSource for InMemoryJobSource {
    async fn next_delivery(&mut self) -> Option<Result<Box<dyn JobDelivery>, QueueError>> {
        let payload = self.receiver.recv().await?;
        let delivery = InMemoryDelivery {
            tag: self.next_tag.fetch_add(1, Ordering::Relaxed),
            payload,
            settled: AtomicBool::new(false),
            log: Arc::clone(&self.settlements),
        };
        Some(Ok(Box::new(delivery)))
    }
}

struct InMemoryDelivery {
    tag: u64,
    payload: Vec<u8>,
    settled: AtomicBool,
    log: Arc<SettlementLog>,
}

impl InMemoryDelivery {
    async fn settle(&self, settlement: Settlement) -> Result<(), QueueError> {
        if self.settled.swap(true, Ordering::SeqCst) {
            return Err(QueueError::AcknowledgeFailed(format!(
                "delivery {} already settled",
                self.tag
            )));
        }
        self.log.push(settlement).await;
        Ok(())
    }
}

#[async_trait]
impl JobDelivery for InMemoryDelivery {
    fn payload(&self) -> &[u8] {
        &self.payload
    }

    async fn ack(&self) -> Result<(), QueueError> {
        self.settle(Settlement::Acked(self.tag)).await
    }

    async fn reject(&self) -> Result<(), QueueError> {
        self.settle(Settlement::Rejected(self.tag)).await
    }
}
