//! Administration center backend.
//!
//! A small REST backend that keeps its user accounts and HTTP sessions in a
//! single SQL database. SQLite, PostgreSQL and MySQL are supported; the
//! engine is selected by the scheme of the `DATABASE_URI` environment
//! variable and the schema is migrated on startup.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod session;
