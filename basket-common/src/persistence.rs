//! Shopping list persistence
//!
//! The store saves its whole list as one opaque JSON blob under a single
//! fixed key. Backends only move strings; parsing and the "reset to empty"
//! policy live in the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::{Error, Result};

/// Key the serialized shopping list lives under
pub const SHOPPING_LIST_KEY: &str = "shopping_list";

/// Durable key-value storage for the serialized list
#[async_trait]
pub trait ListPersistence: Send + Sync {
    /// Backend name for log lines
    fn backend_name(&self) -> &'static str;

    /// Read the value stored under `key`, if any
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite the value stored under `key`
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Persistence backed by the SQLite `settings` table
#[derive(Clone)]
pub struct SettingsPersistence {
    db: SqlitePool,
}

impl SettingsPersistence {
    /// Wrap a pool whose database already has a `settings` table
    /// (see [`crate::db::init::init_database`])
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListPersistence for SettingsPersistence {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        // value column is nullable; a NULL row reads as "nothing saved"
        let value: Option<Option<String>> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.db)
                .await?;

        Ok(value.flatten())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

/// In-process persistence for tests and throwaway sessions
///
/// `set_fail_writes(true)` makes every write return an error, which is how
/// tests exercise the store's degraded mode.
#[derive(Default)]
pub struct MemoryPersistence {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already saved under `key`
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.into());
        Self {
            values: Mutex::new(values),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current raw value under `key`
    pub async fn snapshot(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl ListPersistence for MemoryPersistence {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "memory persistence configured to fail writes",
            )));
        }
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
