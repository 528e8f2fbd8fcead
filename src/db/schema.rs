//! SQL DDL for initializing the settings store.
//! SQLite-first design; mirrors the table the host application provisions.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - Row identity is the (user_id, category, config_key) triple, enforced UNIQUE
/// - `config_value` nullable TEXT; the only column this tool ever writes
///
/// Production runs never execute this implicitly: the settings rows pre-exist.
/// `init_schema` is for tests and provisioning a fresh store.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS system_settings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    category TEXT NOT NULL,
    config_key TEXT NOT NULL,
    config_value TEXT,
    data_type TEXT NOT NULL DEFAULT 'string',
    is_sensitive INTEGER NOT NULL DEFAULT 0,
    is_required INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (user_id, category, config_key)
);
"#;
