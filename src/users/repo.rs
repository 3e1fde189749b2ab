use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// User record as stored. Never serialized directly; responses go through
/// the public projection in `dto`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

const COLUMNS: &str = "id, email, username, full_name, password_hash, is_admin, is_active, created_at";

impl User {
    /// Exact-match lookup by email (case-sensitive).
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(db)
        .await
    }

    /// Insert a new user. The unique constraint on `email` is the final
    /// word on duplicates; a violation surfaces as a database error the
    /// caller maps to a conflict.
    pub async fn create(
        db: &PgPool,
        email: &str,
        username: &str,
        full_name: &str,
        password_hash: &str,
        is_active: bool,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, full_name, password_hash, is_active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(email)
        .bind(username)
        .bind(full_name)
        .bind(password_hash)
        .bind(is_active)
        .fetch_one(db)
        .await
    }

    /// Partial field replacement: absent fields keep their stored value.
    pub async fn update(
        db: &PgPool,
        id: i64,
        email: Option<&str>,
        username: Option<&str>,
        full_name: Option<&str>,
        is_active: Option<bool>,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                username = COALESCE($3, username), \
                full_name = COALESCE($4, full_name), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(email)
        .bind(username)
        .bind(full_name)
        .bind(is_active)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(db: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
    }
}
