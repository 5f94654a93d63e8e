use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{common, User, UserStore};
use crate::error::AuthError;

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn add_user(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let hash = common::hash_password(password)?;
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(hash)
            .execute(&self.pool)
            .await
            .map_err(|e| common::map_insert_error(username, e))?;
        Ok(())
    }

    async fn remove_user(&self, username: &str) -> Result<(), AuthError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    async fn update_password(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let hash = common::hash_password(password)?;
        let result = sqlx::query("UPDATE users SET password = ? WHERE username = ?")
            .bind(hash)
            .bind(username)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    async fn verify_user(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        match stored {
            Some(hash) => common::verify_password(password, &hash),
            None => Ok(false),
        }
    }

    async fn get_user(&self, username: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }
}
