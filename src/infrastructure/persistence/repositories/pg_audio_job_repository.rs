use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{AudioJobRepository, RepositoryError};
use crate::domain::{AudioId, AudioJob, ProcessingStatus, UserPlan};

const UNIQUE_VIOLATION: &str = "23505";

pub struct PgAudioJobRepository {
    pool: PgPool,
}

impl PgAudioJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AudioJobRepository for PgAudioJobRepository {
    #[instrument(skip(self, job), fields(audio_id = %job.audio_id))]
    async fn create(&self, job: &AudioJob) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO audio_processing (
                audio_token, audio_url, transcript, summarization, key_points,
                processing_status, error_message, main_language, user_plan,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(job.audio_id.as_str())
        .bind(&job.audio_url)
        .bind(&job.transcript)
        .bind(&job.summarization)
        .bind(Json(&job.key_points))
        .bind(job.status.as_str())
        .bind(&job.error_message)
        .bind(&job.main_language)
        .bind(job.user_plan.as_str())
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                RepositoryError::ConstraintViolation(format!(
                    "audio token already exists: {}",
                    job.audio_id
                ))
            }
            _ => RepositoryError::QueryFailed(e.to_string()),
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(audio_id = %audio_id))]
    async fn get_by_token(&self, audio_id: &AudioId) -> Result<Option<AudioJob>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT audio_token, audio_url, transcript, summarization, key_points,
                   processing_status, error_message, main_language, user_plan,
                   created_at, updated_at
            FROM audio_processing
            WHERE audio_token = $1
            "#,
        )
        .bind(audio_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(|r| job_from_row(&r)).transpose()
    }

    #[instrument(skip(self, job), fields(audio_id = %job.audio_id, status = %job.status))]
    async fn save(&self, job: &AudioJob) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO audio_processing (
                audio_token, audio_url, transcript, summarization, key_points,
                processing_status, error_message, main_language, user_plan,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (audio_token) DO UPDATE SET
                audio_url = EXCLUDED.audio_url,
                transcript = EXCLUDED.transcript,
                summarization = EXCLUDED.summarization,
                key_points = EXCLUDED.key_points,
                processing_status = EXCLUDED.processing_status,
                error_message = EXCLUDED.error_message,
                main_language = EXCLUDED.main_language,
                user_plan = EXCLUDED.user_plan,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(job.audio_id.as_str())
        .bind(&job.audio_url)
        .bind(&job.transcript)
        .bind(&job.summarization)
        .bind(Json(&job.key_points))
        .bind(job.status.as_str())
        .bind(&job.error_message)
        .bind(&job.main_language)
        .bind(job.user_plan.as_str())
        .bind(job.created_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

fn job_from_row(row: &PgRow) -> Result<AudioJob, RepositoryError> {
    let column_err = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

    let status: String = row.try_get("processing_status").map_err(column_err)?;
    let status = status
        .parse::<ProcessingStatus>()
        .map_err(RepositoryError::QueryFailed)?;
    let user_plan: String = row.try_get("user_plan").map_err(column_err)?;
    let key_points: Json<Vec<String>> = row.try_get("key_points").map_err(column_err)?;
    let audio_token: String = row.try_get("audio_token").map_err(column_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column_err)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(column_err)?;

    Ok(AudioJob {
        audio_id: AudioId::from_raw(audio_token),
        audio_url: row.try_get("audio_url").map_err(column_err)?,
        transcript: row.try_get("transcript").map_err(column_err)?,
        summarization: row.try_get("summarization").map_err(column_err)?,
        key_points: key_points.0,
        status,
        error_message: row.try_get("error_message").map_err(column_err)?,
        main_language: row.try_get("main_language").map_err(column_err)?,
        user_plan: UserPlan::from_label(&user_plan),
        created_at,
        updated_at,
    })
}
