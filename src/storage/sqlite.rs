use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::{
    error::{Lookup, StorageError, StorageResult},
    query::{SearchQuery, USER_COLUMNS},
    traits::{ConnectionSource, UserStore},
};
use crate::types::{NewUser, UserFilter, UserRecord};

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(500);

const USERS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birthdate TEXT NOT NULL,
        phone TEXT NOT NULL,
        category INTEGER NOT NULL,
        comment TEXT,
        last_modified TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS users_name_idx ON users(name);
    CREATE INDEX IF NOT EXISTS users_category_idx ON users(category);
"#;

/// Opens the SQLite database file anew for every call.
#[derive(Clone, Debug)]
pub struct SqliteFile {
    pub path: String,
    busy_timeout: Duration,
}

impl SqliteFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

impl ConnectionSource for SqliteFile {
    fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }
}

fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        birthdate: row.get(2)?,
        phone: row.get(3)?,
        category: row.get(4)?,
        comment: row.get(5)?,
        last_modified: row.get(6)?,
    })
}

fn db_insert_user(conn: &Connection, user: &NewUser, now: DateTime<Utc>) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO users (name, birthdate, phone, category, comment, last_modified)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            user.name,
            user.birthdate,
            user.phone,
            user.category,
            user.comment,
            now
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn db_update_user(
    conn: &Connection,
    id: i64,
    user: &NewUser,
    now: DateTime<Utc>,
) -> rusqlite::Result<usize> {
    conn.execute(
        r#"
        UPDATE users
        SET name = ?1,
            birthdate = ?2,
            phone = ?3,
            category = ?4,
            comment = ?5,
            last_modified = ?6
        WHERE id = ?7
        "#,
        params![
            user.name,
            user.birthdate,
            user.phone,
            user.category,
            user.comment,
            now,
            id
        ],
    )
}

fn db_delete_user(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM users WHERE id = ?1", params![id])
}

fn db_load_user(conn: &Connection, id: i64) -> rusqlite::Result<Option<UserRecord>> {
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
        params![id],
        map_user_row,
    )
    .optional()
}

fn db_search_first(conn: &Connection, query: &SearchQuery) -> rusqlite::Result<Option<UserRecord>> {
    let mut stmt = conn.prepare(&query.sql())?;
    stmt.query_row(params_from_iter(query.params().iter()), map_user_row)
        .optional()
}

/// Repository over the `users` table. Holds no connection between calls.
#[derive(Clone, Debug)]
pub struct SqliteUserStore<C = SqliteFile> {
    source: C,
}

impl SqliteUserStore<SqliteFile> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_source(SqliteFile::new(path))
    }

    pub fn path(&self) -> &str {
        &self.source.path
    }

    pub fn reset_all(&self) -> std::io::Result<()> {
        if !Path::new(&self.source.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.source.path)
    }
}

impl<C: ConnectionSource> SqliteUserStore<C> {
    pub fn with_source(source: C) -> Self {
        Self { source }
    }

    pub fn init(&self) -> StorageResult<()> {
        self.with_conn("init", |_conn| Ok(()))
    }

    /// Open a connection, ensure the schema and run `f`. The connection is
    /// dropped on every path out of this function.
    fn with_conn<F, T>(&self, op: &str, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        let _span = tracing::debug_span!("user_store", op).entered();
        let result = self
            .source
            .connect()
            .and_then(|conn| {
                conn.execute_batch(USERS_SCHEMA)?;
                Ok(conn)
            })
            .map_err(StorageError::from)
            .and_then(|conn| f(&conn));

        match &result {
            Ok(_) => log::debug!("{} completed", op),
            Err(StorageError::Store(err)) => log::error!("{} failed: {}", op, err),
            Err(err) => log::debug!("{}: {}", op, err),
        }
        result
    }
}

impl<C: ConnectionSource> UserStore for SqliteUserStore<C> {
    fn insert(&self, user: &NewUser) -> StorageResult<i64> {
        self.with_conn("insert", |conn| Ok(db_insert_user(conn, user, Utc::now())?))
    }

    fn update(&self, id: i64, user: &NewUser) -> StorageResult<UserRecord> {
        self.with_conn("update", |conn| {
            if db_update_user(conn, id, user, Utc::now())? == 0 {
                return Err(StorageError::NotFound(Lookup::Id(id)));
            }
            db_load_user(conn, id)?.ok_or(StorageError::NotFound(Lookup::Id(id)))
        })
    }

    fn delete(&self, id: i64) -> StorageResult<UserRecord> {
        self.with_conn("delete", |conn| {
            let record = db_load_user(conn, id)?.ok_or(StorageError::NotFound(Lookup::Id(id)))?;
            if db_delete_user(conn, id)? == 0 {
                return Err(StorageError::NotFound(Lookup::Id(id)));
            }
            Ok(record)
        })
    }

    fn search(&self, filter: &UserFilter) -> StorageResult<UserRecord> {
        let query = SearchQuery::from_filter(filter);
        self.with_conn("search", |conn| {
            db_search_first(conn, &query)?
                .ok_or_else(|| StorageError::NotFound(Lookup::Filter(filter.clone())))
        })
    }

    fn get_by_id(&self, id: i64) -> StorageResult<UserRecord> {
        self.with_conn("get_by_id", |conn| {
            db_load_user(conn, id)?.ok_or(StorageError::NotFound(Lookup::Id(id)))
        })
    }
}
