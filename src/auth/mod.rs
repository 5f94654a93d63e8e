//! User accounts stored in the `users` table.
//!
//! Passwords are stored as salted Argon2id hashes; plaintext never touches
//! the database. One backend exists per supported database engine, all
//! running the same statements modulo placeholder syntax.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::db::SqlxPool;
use crate::error::AuthError;

pub mod common;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

/// A user row. The stored password hash never leaves this module.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new user. Fails with [`AuthError::UserExists`] if the
    /// username is already taken.
    async fn add_user(&self, username: &str, password: &str) -> Result<(), AuthError>;

    /// Delete a user. Fails with [`AuthError::UserNotFound`] if absent.
    async fn remove_user(&self, username: &str) -> Result<(), AuthError>;

    /// Replace the password of an existing user.
    async fn update_password(&self, username: &str, password: &str) -> Result<(), AuthError>;

    /// Check a password against the stored hash. Unknown users verify as
    /// `false` rather than erroring.
    async fn verify_user(&self, username: &str, password: &str) -> Result<bool, AuthError>;

    async fn get_user(&self, username: &str) -> Result<Option<User>, AuthError>;

    async fn list_users(&self) -> Result<Vec<User>, AuthError>;
}

pub type DynUserStore = Arc<dyn UserStore>;

/// Create the user store backend matching the connected database.
pub fn open(pool: &SqlxPool) -> DynUserStore {
    match pool {
        SqlxPool::Sqlite(pool) => Arc::new(sqlite::SqliteUserStore::new(pool.clone())),
        SqlxPool::Postgres(pool) => Arc::new(postgres::PostgresUserStore::new(pool.clone())),
        SqlxPool::MySql(pool) => Arc::new(mysql::MySqlUserStore::new(pool.clone())),
    }
}
