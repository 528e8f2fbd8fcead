use crate::db::models::{SettingStatus, SettingsKey, ValueStatus};
use crate::db::schema::SQLITE_INIT;
use crate::error::SyncError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::warn;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool on an existing database file. A missing or corrupt file is a
/// connect error; this tool maintains the store, it never creates it.
pub async fn connect(database_url: &str) -> Result<SqlitePool, SyncError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(false);
    Ok(SqlitePool::connect_with(opts).await?)
}

/// Open a pool, creating the database file if absent. Used by tests and when
/// provisioning a fresh store; pair with `init_schema`.
pub async fn create(database_url: &str) -> Result<SqlitePool, SyncError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    Ok(SqlitePool::connect_with(opts).await?)
}

#[derive(Clone)]
pub struct SettingsStorage {
    pool: SqlitePool,
}

impl SettingsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SyncError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Overwrite `config_value` for the row matching `key`. Returns rows affected.
    /// Zero matching rows is not an error: the row is provisioned by the host
    /// application, and this tool never inserts one.
    pub async fn set_config_value(&self, key: &SettingsKey, value: &str) -> Result<u64, SyncError> {
        let result = sqlx::query(
            r#"
            UPDATE system_settings
            SET config_value = ?
            WHERE user_id = ? AND category = ? AND config_key = ?
            "#,
        )
        .bind(value)
        .bind(key.user_id)
        .bind(&key.category)
        .bind(&key.config_key)
        .execute(&self.pool)
        .await?;

        let affected = result.rows_affected();
        if affected == 0 {
            warn!(
                user_id = key.user_id,
                category = %key.category,
                config_key = %key.config_key,
                "update matched no settings row"
            );
        }
        Ok(affected)
    }

    /// Read back every setting owned by `user_id` in `category`, classified for
    /// the verification report, ordered by key.
    pub async fn category_report(
        &self,
        user_id: i64,
        category: &str,
    ) -> Result<Vec<SettingStatus>, SyncError> {
        let rows = sqlx::query(
            r#"SELECT config_key, config_value FROM system_settings
               WHERE user_id = ? AND category = ?
               ORDER BY config_key ASC"#,
        )
        .bind(user_id)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_status).collect()
    }

    fn row_to_status(row: SqliteRow) -> Result<SettingStatus, SyncError> {
        let config_key: String = row.try_get("config_key")?;
        let config_value: Option<String> = row.try_get("config_value")?;
        Ok(SettingStatus {
            config_key,
            status: ValueStatus::from(config_value.as_deref()),
        })
    }
}
