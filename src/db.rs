//! Database connection handling.
//!
//! The backend speaks to one of three engines, selected by the scheme of
//! `DATABASE_URI`. Schema migrations for the selected dialect are embedded
//! in the binary and applied on connect.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{MySqlPool, PgPool, SqlitePool};

use crate::config::DatabaseUri;
use crate::error::AdminError;

/// Embedded migrations for the SQLite dialect.
pub static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("migrations/sqlite");
/// Embedded migrations for the PostgreSQL dialect.
pub static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("migrations/postgres");
/// Embedded migrations for the MySQL dialect.
pub static MYSQL_MIGRATOR: Migrator = sqlx::migrate!("migrations/mysql");

const MAX_CONNECTIONS: u32 = 5;

/// A connection pool for whichever database engine the backend runs against.
#[derive(Clone, Debug)]
pub enum SqlxPool {
    Sqlite(SqlitePool),
    Postgres(PgPool),
    MySql(MySqlPool),
}

impl SqlxPool {
    /// Connect to the database named by `uri` and bring its schema up to date.
    pub async fn connect(uri: &DatabaseUri) -> Result<Self, AdminError> {
        let conn = uri.connection_string();
        match uri {
            DatabaseUri::Sqlite(_) => {
                let options = SqliteConnectOptions::from_str(&conn)?.create_if_missing(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect_with(options)
                    .await?;
                SQLITE_MIGRATOR.run(&pool).await?;
                Ok(Self::Sqlite(pool))
            }
            DatabaseUri::Postgres(_) => {
                let pool = PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect(&conn)
                    .await?;
                POSTGRES_MIGRATOR.run(&pool).await?;
                Ok(Self::Postgres(pool))
            }
            DatabaseUri::Mysql(_) => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect(&conn)
                    .await?;
                MYSQL_MIGRATOR.run(&pool).await?;
                Ok(Self::MySql(pool))
            }
        }
    }
}
