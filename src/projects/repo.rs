use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_priority", rename_all = "lowercase")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub owner_id: Option<i64>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

const COLUMNS: &str = "id, name, description, status, priority, owner_id, created_at, updated_at";

impl Project {
    pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<Project>> {
        sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> sqlx::Result<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        name: &str,
        description: Option<&str>,
        status: ProjectStatus,
        priority: ProjectPriority,
        owner_id: i64,
    ) -> sqlx::Result<Project> {
        sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects (name, description, status, priority, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(priority)
        .bind(owner_id)
        .fetch_one(db)
        .await
    }

    /// Partial field replacement; `updated_at` is stamped server-side.
    pub async fn update(
        db: &PgPool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<ProjectStatus>,
        priority: Option<ProjectPriority>,
    ) -> sqlx::Result<Option<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                status = COALESCE($4, status), \
                priority = COALESCE($5, priority), \
                updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(priority)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_status(db: &PgPool, status: ProjectStatus) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE status = $1")
            .bind(status)
            .fetch_one(db)
            .await
    }
}
