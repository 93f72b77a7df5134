use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use anyhow::Result;
use rusqlite::types::{FromSql, Value, ValueRef};
use rusqlite::{Connection, Params, Row};
use std::collections::HashMap;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdesk.db";

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    description TEXT,
    status TEXT NOT NULL DEFAULT 'Todo' CHECK (status IN ('Todo', 'InProgress', 'Done')),
    image_path TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    updated_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
);
CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);
";

/// How many rows a statement should hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    None,
    One,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Nothing,
    One(Option<Record>),
    All(Vec<Record>),
}

impl Fetched {
    pub fn into_one(self) -> Option<Record> {
        match self {
            Fetched::One(record) => record,
            Fetched::All(records) => records.into_iter().next(),
            Fetched::Nothing => None,
        }
    }

    pub fn into_all(self) -> Vec<Record> {
        match self {
            Fetched::One(record) => record.into_iter().collect(),
            Fetched::All(records) => records,
            Fetched::Nothing => Vec::new(),
        }
    }
}

/// A result row addressed by column name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    fn from_row(columns: &[String], row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut values = HashMap::with_capacity(columns.len());
        for column in columns {
            values.insert(column.clone(), row.get::<_, Value>(column.as_str())?);
        }
        Ok(Record { values })
    }

    pub fn get<T: FromSql>(&self, column: &str) -> Result<T, StoreError> {
        let value = self.values.get(column).ok_or_else(|| StoreError::MissingColumn { column: column.to_string() })?;
        T::column_result(ValueRef::from(value)).map_err(|source| StoreError::Column {
            column: column.to_string(),
            source,
        })
    }
}

/// Owner of the single SQLite connection.
///
/// Every statement runs in autocommit mode, so each write is durable on its
/// own; nothing spans statements.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens the store in the default data directory.
    pub fn new() -> Result<Store> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Store::open(db_file_path)?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Store, StoreError> {
        let conn = Connection::open(path)?;
        Store::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Store, StoreError> {
        Store::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Store, StoreError> {
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("store schema ready");
        Ok(Store { conn })
    }

    pub fn execute<P: Params>(&self, sql: &str, params: P, fetch: Fetch) -> Result<Fetched, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let mut rows = stmt.query(params)?;

        let fetched = match fetch {
            Fetch::None => {
                while rows.next()?.is_some() {}
                Fetched::Nothing
            }
            Fetch::One => {
                let record = match rows.next()? {
                    Some(row) => Some(Record::from_row(&columns, row)?),
                    None => None,
                };
                Fetched::One(record)
            }
            Fetch::All => {
                let mut records = Vec::new();
                while let Some(row) = rows.next()? {
                    records.push(Record::from_row(&columns, row)?);
                }
                Fetched::All(records)
            }
        };

        Ok(fetched)
    }

    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
