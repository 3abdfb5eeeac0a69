use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{JobDelivery, JobSource, QueueError};
use crate::domain::JobDescriptor;

use super::audio_pipeline::{AudioPipeline, ProcessOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Acknowledged,
    Rejected,
}

/// Queue consumer: one delivery at a time, acknowledged only after the whole
/// pipeline succeeded. Rejections never requeue.
pub struct AudioJobWorker {
    source: Box<dyn JobSource>,
    pipeline: Arc<AudioPipeline>,
}

impl AudioJobWorker {
    pub fn new(source: Box<dyn JobSource>, pipeline: Arc<AudioPipeline>) -> Self {
        Self { source, pipeline }
    }

    /// Runs until the source closes. A broken source ends the loop with an error.
    pub async fn run(mut self) -> Result<(), QueueError> {
        tracing::info!("Audio job worker started");
        while let Some(next) = self.source.next_delivery().await {
            match next {
                Ok(delivery) => {
                    self.handle_delivery(delivery.as_ref()).await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Job source failed, stopping worker");
                    return Err(e);
                }
            }
        }
        tracing::info!("Audio job worker stopped: queue closed");
        Ok(())
    }

    pub async fn handle_delivery(&self, delivery: &dyn JobDelivery) -> DeliveryOutcome {
        let descriptor = match JobDescriptor::from_slice(delivery.payload()) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting invalid job descriptor");
                return reject(delivery).await;
            }
        };

        let span = tracing::info_span!(
            "audio_job",
            audio_id = %descriptor.audio_id,
            language = %descriptor.main_language,
            plan = %descriptor.user_plan,
        );

        async {
            match self.pipeline.process(&descriptor).await {
                Ok(ProcessOutcome::Completed(_)) => acknowledge(delivery).await,
                Ok(ProcessOutcome::Skipped { status, .. }) => {
                    tracing::info!(status = %status, "Acknowledging redelivered terminal job");
                    acknowledge(delivery).await
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting job after pipeline failure");
                    reject(delivery).await
                }
            }
        }
        .instrument(span)
        .await
    }
}

async fn acknowledge(delivery: &dyn JobDelivery) -> DeliveryOutcome {
    if let Err(e) = delivery.ack().await {
        tracing::error!(error = %e, "Failed to acknowledge delivery");
    }
    DeliveryOutcome::Acknowledged
}

async fn reject(delivery: &dyn JobDelivery) -> DeliveryOutcome {
    if let Err(e) = delivery.reject().await {
        tracing::error!(error = %e, "Failed to reject delivery");
    }
    DeliveryOutcome::Rejected
}
