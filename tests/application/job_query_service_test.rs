use std::sync::Arc;

use audio_digest::application::ports::AudioJobRepository;
use audio_digest::application::services::{JobQueryService, QueryError};
use audio_digest::domain::{AudioId, AudioJob, ProcessingStatus, UserPlan};
use audio_digest::infrastructure::persistence::InMemoryAudioJobRepository;

async fn repository_with(job: &AudioJob) -> Arc<InMemoryAudioJobRepository> {
    let repository = Arc::new(InMemoryAudioJobRepository::new());
    repository.create(job).await.unwrap();
    repository
}

fn queued_job(token: &str) -> AudioJob {
    AudioJob::with_id(
        AudioId::from_raw(token),
        "https://cdn.example.com/a.mp3".to_string(),
        "en".to_string(),
        UserPlan::Basic,
    )
}

#[tokio::test]
async fn given_queued_job_when_querying_status_then_not_done() {
    let job = queued_job("job-q");
    let service = JobQueryService::new(repository_with(&job).await);

    let view = service.status(&job.audio_id).await.unwrap();

    assert!(!view.done);
    assert_eq!(view.status, ProcessingStatus::OnQueue);
}

#[tokio::test]
async fn given_completed_job_when_querying_then_done_and_report_is_full() {
    let mut job = queued_job("job-c");
    let repository = repository_with(&job).await;
    job.transcript = Some("t".to_string());
    job.summarization = Some("s".to_string());
    job.key_points = vec!["k".to_string()];
    for status in [
        ProcessingStatus::SttProcessed,
        ProcessingStatus::SummaryProcessed,
        ProcessingStatus::KeyPointsProcessed,
        ProcessingStatus::Completed,
    ] {
        job.transition_to(status).unwrap();
    }
    repository.save(&job).await.unwrap();
    let service = JobQueryService::new(repository);

    let view = service.status(&job.audio_id).await.unwrap();
    let report = service.report(&job.audio_id).await.unwrap();

    assert!(view.done);
    assert_eq!(report.transcript.as_deref(), Some("t"));
    assert_eq!(report.summary.as_deref(), Some("s"));
    assert_eq!(report.key_points, vec!["k".to_string()]);
}

#[tokio::test]
async fn given_failed_job_when_querying_report_then_partial_data_is_returned() {
    let mut job = queued_job("job-f");
    let repository = repository_with(&job).await;
    job.transcript = Some("partial".to_string());
    job.transition_to(ProcessingStatus::SttProcessed).unwrap();
    job.mark_failed("summarization failed").unwrap();
    repository.save(&job).await.unwrap();
    let service = JobQueryService::new(repository);

    let view = service.status(&job.audio_id).await.unwrap();
    let report = service.report(&job.audio_id).await.unwrap();

    assert!(!view.done);
    assert_eq!(view.status, ProcessingStatus::Failed);
    assert_eq!(report.transcript.as_deref(), Some("partial"));
    assert!(report.summary.is_none());
    assert!(report.key_points.is_empty());
}

#[tokio::test]
async fn given_unknown_token_when_querying_then_returns_not_found() {
    let service = JobQueryService::new(Arc::new(InMemoryAudioJobRepository::new()));
    let unknown = AudioId::from_raw("missing");

    assert!(matches!(
        service.status(&unknown).await,
        Err(QueryError::NotFound(_))
    ));
    assert!(matches!(
        service.report(&unknown).await,
        Err(QueryError::NotFound(_))
    ));
}
