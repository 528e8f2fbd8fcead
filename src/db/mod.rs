//! Database module: models and schema for the settings store.
//!
//! Layout:
//! - `models.rs`: row key, status classification, and report row types
//! - `schema.rs`: SQL DDL for initializing the store (SQLite-first)

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{SettingStatus, SettingsKey, ValueStatus};
pub use schema::SQLITE_INIT;
pub use sqlite::{SettingsStorage, SqlitePool, connect, create};
