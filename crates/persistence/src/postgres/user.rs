use async_trait::async_trait;
use brokerx_core::User;
use brokerx_ports::{RepositoryError, RepositoryResult, UserRepository};
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

use super::{backend, lookup_error};

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user (out-of-band registration)
    pub async fn insert(&self, user: &User) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password, failed_attempts, locked_until)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(failed_attempts_column(user.failed_attempts)?)
        .bind(user.locked_until)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }
}

fn failed_attempts_column(value: u32) -> RepositoryResult<i32> {
    i32::try_from(value).map_err(backend)
}

fn user_from_row(row: &PgRow) -> RepositoryResult<User> {
    let failed_attempts: i32 = row.try_get("failed_attempts").map_err(backend)?;
    Ok(User {
        id: row.try_get("id").map_err(backend)?,
        email: row.try_get("email").map_err(backend)?,
        password_hash: row.try_get("password").map_err(backend)?,
        failed_attempts: u32::try_from(failed_attempts).map_err(backend)?,
        locked_until: row.try_get("locked_until").map_err(backend)?,
    })
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<User> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password, failed_attempts, locked_until
            FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| lookup_error("user", email, e))?;

        user_from_row(&row)
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET failed_attempts = $1, locked_until = $2
            WHERE id = $3
            "#,
        )
        .bind(failed_attempts_column(user.failed_attempts)?)
        .bind(user.locked_until)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("user", user.id));
        }
        Ok(())
    }
}
