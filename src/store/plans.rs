// src/store/plans.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::utils::normalize_user_id;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CareerPlan {
    pub plan_id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct CareerPlanRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CareerPlanRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a generated career plan as active
    pub async fn save(&self, user_id: &str, title: &str, content: &str) -> Result<CareerPlan> {
        let user_id = normalize_user_id(user_id);
        let plan_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO career_plans (plan_id, user_id, title, content, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, 'active', ?, ?)
            "#,
        )
        .bind(&plan_id)
        .bind(&user_id)
        .bind(title)
        .bind(content)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        info!("Saved career plan {} for user: {}", plan_id, user_id);

        Ok(CareerPlan {
            plan_id,
            user_id,
            title: title.to_string(),
            content: content.to_string(),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// All plans for a user, newest first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<CareerPlan>> {
        let user_id = normalize_user_id(user_id);

        let plans = sqlx::query_as::<_, CareerPlan>(
            r#"
            SELECT plan_id, user_id, title, content, status, created_at, updated_at
            FROM career_plans
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(&user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(plans)
    }

    /// Update a plan's status, e.g. to 'completed' or 'abandoned'
    pub async fn update_status(&self, plan_id: &str, status: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE career_plans
            SET status = ?, updated_at = ?
            WHERE plan_id = ?
            "#,
        )
        .bind(status)
        .bind(Utc::now())
        .bind(plan_id)
        .execute(self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Updated plan {} to status: {}", plan_id, status);
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    #[tokio::test]
    async fn test_saved_plan_is_active_with_uuid() {
        let pool = memory_pool().await;
        let repo = CareerPlanRepository::new(&pool);

        let plan = repo
            .save("jane", "Data Analyst", "Q1: SQL, Q2: Python")
            .await
            .unwrap();

        assert_eq!(plan.status, "active");
        assert!(Uuid::parse_str(&plan.plan_id).is_ok());
    }

    #[tokio::test]
    async fn test_list_returns_only_own_plans() {
        let pool = memory_pool().await;
        let repo = CareerPlanRepository::new(&pool);

        repo.save("jane", "Plan A", "content").await.unwrap();
        repo.save("john", "Plan B", "content").await.unwrap();

        let plans = repo.list_for_user("jane").await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].title, "Plan A");
    }

    #[tokio::test]
    async fn test_update_status() {
        let pool = memory_pool().await;
        let repo = CareerPlanRepository::new(&pool);

        let plan = repo.save("jane", "Plan A", "content").await.unwrap();

        assert!(repo.update_status(&plan.plan_id, "completed").await.unwrap());
        let plans = repo.list_for_user("jane").await.unwrap();
        assert_eq!(plans[0].status, "completed");

        assert!(!repo.update_status("no-such-plan", "completed").await.unwrap());
    }
}
