//! Session persistence backed by the application database.
//!
//! Sessions live next to the `users` table in whichever engine the backend
//! is connected to, so a deployment needs exactly one database.

use async_trait::async_trait;
use tower_sessions::session::{Id, Record};
use tower_sessions::{session_store, ExpiredDeletion, SessionStore};
use tower_sessions_sqlx_store::{MySqlStore, PostgresStore, SqliteStore};

use crate::db::SqlxPool;

#[derive(Clone, Debug)]
pub enum SqlxSessionStore {
    Sqlite(SqliteStore),
    Postgres(PostgresStore),
    MySql(MySqlStore),
}

impl SqlxSessionStore {
    /// Create a session store on top of the given connection pool.
    pub fn new(pool: &SqlxPool) -> Self {
        match pool {
            SqlxPool::Sqlite(pool) => Self::Sqlite(SqliteStore::new(pool.clone())),
            SqlxPool::Postgres(pool) => Self::Postgres(PostgresStore::new(pool.clone())),
            SqlxPool::MySql(pool) => Self::MySql(MySqlStore::new(pool.clone())),
        }
    }

    /// Create the session table if it does not exist yet.
    pub async fn migrate(&self) -> sqlx::Result<()> {
        match self {
            Self::Sqlite(store) => store.migrate().await,
            Self::Postgres(store) => store.migrate().await,
            Self::MySql(store) => store.migrate().await,
        }
    }
}

#[async_trait]
impl SessionStore for SqlxSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        match self {
            Self::Sqlite(store) => store.create(record).await,
            Self::Postgres(store) => store.create(record).await,
            Self::MySql(store) => store.create(record).await,
        }
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        match self {
            Self::Sqlite(store) => store.save(record).await,
            Self::Postgres(store) => store.save(record).await,
            Self::MySql(store) => store.save(record).await,
        }
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        match self {
            Self::Sqlite(store) => store.load(session_id).await,
            Self::Postgres(store) => store.load(session_id).await,
            Self::MySql(store) => store.load(session_id).await,
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        match self {
            Self::Sqlite(store) => store.delete(session_id).await,
            Self::Postgres(store) => store.delete(session_id).await,
            Self::MySql(store) => store.delete(session_id).await,
        }
    }
}

#[async_trait]
impl ExpiredDeletion for SqlxSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        match self {
            Self::Sqlite(store) => store.delete_expired().await,
            Self::Postgres(store) => store.delete_expired().await,
            Self::MySql(store) => store.delete_expired().await,
        }
    }
}
