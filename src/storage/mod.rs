use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::now_rfc3339;

/// Key holding the serialized draft of the last submitted invoice.
pub const INVOICE_DATA_KEY: &str = "invoiceData";
/// Key holding the metadata of the last accepted upload.
pub const INVOICE_FILE_KEY: &str = "invoiceFile";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage query failed: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("storage payload could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value store backing the form. Values are JSON strings;
/// writes replace whatever the key held before.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    pub fn new(db_path: PathBuf) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut store = LocalStore { conn };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL
            );",
        )?;

        let migrations = vec![(
            "001_create_storage.sql",
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/migrations/001_create_storage.sql"
            )),
        )];

        for (name, sql) in migrations {
            let applied: Option<String> = self
                .conn
                .query_row(
                    "SELECT name FROM schema_migrations WHERE name = ?1",
                    params![name],
                    |row| row.get(0),
                )
                .optional()?;

            if applied.is_none() {
                let tx = self.conn.transaction()?;
                tx.execute_batch(sql)?;
                tx.execute(
                    "INSERT INTO schema_migrations (name, applied_at) VALUES (?1, datetime('now'))",
                    params![name],
                )?;
                tx.commit()?;
            }
        }

        Ok(())
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM storage WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }
}
