//! User repository
//!
//! CRUD against the `users` table. Identifiers are assigned by the
//! database (BIGSERIAL) and never reused by the application.

use sqlx::{FromRow, PgPool};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "User",
            id: id.to_string(),
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user; the database assigns the id.
    pub async fn create(&self, name: &str) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (name) VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// List users with offset/limit, ordered by id.
    ///
    /// No clamping: out-of-range values are rejected by the database.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as(
            r#"
            SELECT id, name FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Update a user's name in place.
    ///
    /// The UPDATE itself is the existence check: zero rows means not found.
    pub async fn update_name(&self, id: i64, name: &str) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            UPDATE users SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }

        Ok(())
    }
}
