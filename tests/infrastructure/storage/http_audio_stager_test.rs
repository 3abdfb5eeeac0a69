use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tempfile::TempDir;

use audio_digest::application::ports::{AudioStager, Stage, StageErrorKind};
use audio_digest::domain::AudioId;
use audio_digest::infrastructure::storage::HttpAudioStager;

use crate::helpers::mock_http_server::start_mock_server;

const AUDIO_BYTES: &[u8] = b"RIFF....WAVEfmt fake audio payload";

fn audio_routes() -> Router {
    Router::new()
        .route("/media/talk.wav", get(|| async { AUDIO_BYTES }))
        .route(
            "/media/missing.mp3",
            get(|| async { (StatusCode::NOT_FOUND, "no such object") }),
        )
}

fn stager(dir: &TempDir) -> HttpAudioStager {
    HttpAudioStager::new(dir.path().join("audios"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn given_reachable_url_when_fetching_then_writes_audio_named_after_token() {
    let (base_url, shutdown_tx) = start_mock_server(audio_routes()).await;
    let dir = TempDir::new().unwrap();
    let stager = stager(&dir);

    let path = stager
        .fetch(
            &format!("{}/media/talk.wav?signature=secret", base_url),
            &AudioId::from_raw("job-1"),
        )
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("audios").join("job-1.wav"));
    assert_eq!(tokio::fs::read(&path).await.unwrap(), AUDIO_BYTES);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_object_when_fetching_then_returns_network_error_and_leaves_no_file() {
    let (base_url, shutdown_tx) = start_mock_server(audio_routes()).await;
    let dir = TempDir::new().unwrap();
    let stager = stager(&dir);

    let result = stager
        .fetch(
            &format!("{}/media/missing.mp3", base_url),
            &AudioId::from_raw("job-2"),
        )
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.stage, Stage::Staging);
    assert_eq!(err.kind, StageErrorKind::Network);
    assert!(!dir.path().join("audios").join("job-2.mp3").exists());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_then_returns_staging_error() {
    let dir = TempDir::new().unwrap();
    let stager = stager(&dir);

    let result = stager
        .fetch("http://127.0.0.1:9/a.mp3", &AudioId::from_raw("job-3"))
        .await;

    assert_eq!(result.unwrap_err().stage, Stage::Staging);
}

#[tokio::test]
async fn given_staged_file_when_releasing_twice_then_both_calls_succeed() {
    let (base_url, shutdown_tx) = start_mock_server(audio_routes()).await;
    let dir = TempDir::new().unwrap();
    let stager = stager(&dir);
    let path = stager
        .fetch(
            &format!("{}/media/talk.wav", base_url),
            &AudioId::from_raw("job-4"),
        )
        .await
        .unwrap();

    stager.release(&path).await.unwrap();
    stager.release(&path).await.unwrap();

    assert!(!path.exists());
    shutdown_tx.send(()).ok();
}

#[test]
fn given_missing_folder_when_building_stager_then_folder_is_created() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("nested").join("audios");

    HttpAudioStager::new(folder.clone(), Duration::from_secs(1)).unwrap();

    assert!(folder.is_dir());
}

#[tokio::test]
async fn given_token_escaping_folder_when_fetching_then_rejects_before_download() {
    let (base_url, shutdown_tx) = start_mock_server(audio_routes()).await;
    let dir = TempDir::new().unwrap();
    let stager = stager(&dir);

    let err = stager
        .fetch(
            &format!("{}/media/talk.wav", base_url),
            &AudioId::from_raw("../escaped"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.stage, Stage::Staging);
    assert_eq!(err.kind, StageErrorKind::Io);
    assert!(!dir.path().join("escaped.wav").exists());
    shutdown_tx.send(()).ok();
}
