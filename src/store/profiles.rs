// src/store/profiles.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::utils::normalize_user_id;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredProfile {
    pub user_id: String,
    pub skills: String,
    pub interests: String,
    pub experience: String,
    pub goals: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct ProfileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Save a user profile, replacing any existing one for the same user
    pub async fn save(
        &self,
        user_id: &str,
        skills: &str,
        interests: &str,
        experience: &str,
        goals: &str,
    ) -> Result<StoredProfile> {
        let user_id = normalize_user_id(user_id);
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, skills, interests, experience, goals, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                skills = excluded.skills,
                interests = excluded.interests,
                experience = excluded.experience,
                goals = excluded.goals,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&user_id)
        .bind(skills)
        .bind(interests)
        .bind(experience)
        .bind(goals)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        info!("Saved profile for user: {}", user_id);

        // created_at is preserved on conflict; read the row back
        let profile = self.get(&user_id).await?.ok_or_else(|| {
            anyhow::anyhow!("Profile missing immediately after save: {}", user_id)
        })?;
        Ok(profile)
    }

    /// Find a profile by user id
    pub async fn get(&self, user_id: &str) -> Result<Option<StoredProfile>> {
        let user_id = normalize_user_id(user_id);

        let profile = sqlx::query_as::<_, StoredProfile>(
            r#"
            SELECT user_id, skills, interests, experience, goals, created_at, updated_at
            FROM user_profiles
            WHERE user_id = ?
            "#,
        )
        .bind(&user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    #[tokio::test]
    async fn test_save_then_get_roundtrip() {
        let pool = memory_pool().await;
        let repo = ProfileRepository::new(&pool);

        repo.save("jane", "Rust, SQL", "Backend", "5 years", "Staff engineer")
            .await
            .unwrap();

        let profile = repo.get("jane").await.unwrap().unwrap();
        assert_eq!(profile.skills, "Rust, SQL");
        assert_eq!(profile.goals, "Staff engineer");
    }

    #[tokio::test]
    async fn test_save_upserts_and_keeps_created_at() {
        let pool = memory_pool().await;
        let repo = ProfileRepository::new(&pool);

        let first = repo.save("jane", "Rust", "", "", "").await.unwrap();
        let second = repo.save("jane", "Rust, SQL", "", "", "").await.unwrap();

        assert_eq!(second.skills, "Rust, SQL");
        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn test_user_id_is_normalized() {
        let pool = memory_pool().await;
        let repo = ProfileRepository::new(&pool);

        repo.save("Jane Doe", "Rust", "", "", "").await.unwrap();

        assert!(repo.get("jane_doe").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let pool = memory_pool().await;
        let repo = ProfileRepository::new(&pool);

        assert!(repo.get("nobody").await.unwrap().is_none());
    }
}
