// src/store/applications.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::utils::normalize_user_id;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobApplication {
    pub application_id: String,
    pub user_id: String,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct ApplicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a new application in 'applied' status
    pub async fn track(
        &self,
        user_id: &str,
        job_title: &str,
        company: &str,
    ) -> Result<JobApplication> {
        let user_id = normalize_user_id(user_id);
        let application_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO job_applications
                (application_id, user_id, job_title, company, status, notes, applied_at, updated_at)
            VALUES (?, ?, ?, ?, 'applied', '', ?, ?)
            "#,
        )
        .bind(&application_id)
        .bind(&user_id)
        .bind(job_title)
        .bind(company)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        info!(
            "Tracking application {} to {} for user: {}",
            application_id, company, user_id
        );

        Ok(JobApplication {
            application_id,
            user_id,
            job_title: job_title.to_string(),
            company: company.to_string(),
            status: "applied".to_string(),
            notes: String::new(),
            applied_at: now,
            updated_at: now,
        })
    }

    /// All applications for a user, most recent first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<JobApplication>> {
        let user_id = normalize_user_id(user_id);

        let applications = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT application_id, user_id, job_title, company, status, notes, applied_at, updated_at
            FROM job_applications
            WHERE user_id = ?
            ORDER BY applied_at DESC
            "#,
        )
        .bind(&user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(applications)
    }

    /// Advance an application through the pipeline, optionally appending notes
    pub async fn update_status(
        &self,
        application_id: &str,
        status: &str,
        notes: Option<&str>,
    ) -> Result<bool> {
        let result = match notes {
            Some(notes) => {
                sqlx::query(
                    r#"
                    UPDATE job_applications
                    SET status = ?, notes = ?, updated_at = ?
                    WHERE application_id = ?
                    "#,
                )
                .bind(status)
                .bind(notes)
                .bind(Utc::now())
                .bind(application_id)
                .execute(self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE job_applications
                    SET status = ?, updated_at = ?
                    WHERE application_id = ?
                    "#,
                )
                .bind(status)
                .bind(Utc::now())
                .bind(application_id)
                .execute(self.pool)
                .await?
            }
        };

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Application {} moved to status: {}", application_id, status);
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    #[tokio::test]
    async fn test_track_starts_in_applied_status() {
        let pool = memory_pool().await;
        let repo = ApplicationRepository::new(&pool);

        let app = repo
            .track("jane", "Software Engineer", "StartupX")
            .await
            .unwrap();

        assert_eq!(app.status, "applied");
        assert!(app.notes.is_empty());
        assert!(Uuid::parse_str(&app.application_id).is_ok());
    }

    #[tokio::test]
    async fn test_update_status_with_notes() {
        let pool = memory_pool().await;
        let repo = ApplicationRepository::new(&pool);

        let app = repo.track("jane", "UX Designer", "DesignStudio").await.unwrap();

        let updated = repo
            .update_status(&app.application_id, "interviewing", Some("Phone screen 9/2"))
            .await
            .unwrap();
        assert!(updated);

        let apps = repo.list_for_user("jane").await.unwrap();
        assert_eq!(apps[0].status, "interviewing");
        assert_eq!(apps[0].notes, "Phone screen 9/2");
    }

    #[tokio::test]
    async fn test_update_without_notes_keeps_existing_notes() {
        let pool = memory_pool().await;
        let repo = ApplicationRepository::new(&pool);

        let app = repo.track("jane", "UX Designer", "DesignStudio").await.unwrap();
        repo.update_status(&app.application_id, "interviewing", Some("Phone screen"))
            .await
            .unwrap();
        repo.update_status(&app.application_id, "offer", None)
            .await
            .unwrap();

        let apps = repo.list_for_user("jane").await.unwrap();
        assert_eq!(apps[0].status, "offer");
        assert_eq!(apps[0].notes, "Phone screen");
    }

    #[tokio::test]
    async fn test_unknown_application_not_updated() {
        let pool = memory_pool().await;
        let repo = ApplicationRepository::new(&pool);

        assert!(!repo.update_status("missing", "offer", None).await.unwrap());
    }
}
