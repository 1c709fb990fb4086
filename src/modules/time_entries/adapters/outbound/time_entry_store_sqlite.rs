// SQLite implementation of the TimeEntryStore port.
//
// Responsibilities
// - Own the `time_entries` schema and create it on open.
// - Run blocking rusqlite calls off the async runtime.
// - Check the expected last id and insert inside one IMMEDIATE transaction, so
//   the check holds even when several processes share the database file.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryRange, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::entry_type::EntryType;
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::primitives::{EmployeeId, TimeEntryId};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS time_entries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER NOT NULL,
    type        TEXT    NOT NULL CHECK (type IN ('IN', 'PAUSE', 'RESUME', 'RETURN', 'OUT')),
    timestamp   INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_time_entries_employee_id
    ON time_entries (employee_id, id);
CREATE INDEX IF NOT EXISTS idx_time_entries_employee_timestamp
    ON time_entries (employee_id, timestamp);
";

const LAST_ID_SQL: &str =
    "SELECT id FROM time_entries WHERE employee_id = ?1 ORDER BY id DESC LIMIT 1";

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

#[derive(Clone)]
pub struct SqliteTimeEntryStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTimeEntryStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<F, T>(&self, func: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("sqlite connection poisoned".into()))?;
            func(&mut *guard)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("sqlite task failed: {e}")))?
    }
}

fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let type_str: String = row.get("type")?;
    let entry_type = type_str.parse::<EntryType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(TimeEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        entry_type,
        timestamp: row.get("timestamp")?,
    })
}

#[async_trait::async_trait]
impl TimeEntryStore for SqliteTimeEntryStore {
    async fn last_entry(&self, employee_id: EmployeeId) -> Result<Option<TimeEntry>, StoreError> {
        self.with_conn(move |conn| {
            let entry = conn
                .query_row(
                    "SELECT id, employee_id, type, timestamp FROM time_entries
                     WHERE employee_id = ?1 ORDER BY id DESC LIMIT 1",
                    params![employee_id],
                    map_row,
                )
                .optional()?;
            Ok(entry)
        })
        .await
    }

    async fn append(
        &self,
        entry: NewTimeEntry,
        expected_last_id: Option<TimeEntryId>,
    ) -> Result<TimeEntry, StoreError> {
        self.with_conn(move |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let actual: Option<TimeEntryId> = tx
                .query_row(LAST_ID_SQL, params![entry.employee_id], |row| row.get(0))
                .optional()?;
            if actual != expected_last_id {
                return Err(StoreError::Conflict {
                    employee_id: entry.employee_id,
                    expected: expected_last_id,
                    actual,
                });
            }
            tx.execute(
                "INSERT INTO time_entries (employee_id, type, timestamp) VALUES (?1, ?2, ?3)",
                params![entry.employee_id, entry.entry_type.as_str(), entry.timestamp],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(entry.with_id(id))
        })
        .await
    }

    async fn list(
        &self,
        employee_id: EmployeeId,
        range: EntryRange,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, employee_id, type, timestamp FROM time_entries
                 WHERE employee_id = ?1
                   AND (?2 IS NULL OR timestamp >= ?2)
                   AND (?3 IS NULL OR timestamp <= ?3)
                 ORDER BY timestamp ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![employee_id, range.start, range.end], map_row)?;
            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
        .await
    }
}
