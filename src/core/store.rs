//! SQLite-backed connection store
//!
//! One database file per user (`~/.config/warp/warp.db`), opened once per
//! process invocation and closed exactly once at exit. Two tables are created
//! idempotently at startup: `main` holds connection records, `alias` is
//! reserved schema that no operation currently reads or writes.
//!
//! Records are addressed by SQLite's implicit `rowid`: stable, assigned in
//! increasing order at insertion, and never renumbered by deletion.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Database filename within the config directory
const DB_FILE: &str = "warp.db";

/// Environment override for the config directory, used by tests
const CONFIG_DIR_ENV: &str = "WARP_CONFIG_DIR";

/// Fixed number of fields in a connection record
pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no connection stored under id '{0}'")]
    NotFound(String),

    #[error("expected {FIELD_COUNT} comma-separated fields, got {got}: '{line}'")]
    Arity { got: usize, line: String },

    #[error("could not determine a config directory for this user")]
    NoConfigDir,

    #[error("cannot access database path: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// One stored SSH target, fields in fixed column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub environment: String,
    pub hostname: String,
    pub ip_address: String,
    pub username: String,
    pub password: String,
}

impl ConnectionRecord {
    /// Parse one comma-separated line in declared column order.
    ///
    /// Anything other than exactly five fields is rejected, so a bad line
    /// aborts a bulk import before any row is written.
    pub fn parse_line(line: &str) -> Result<Self, StoreError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(StoreError::Arity {
                got: fields.len(),
                line: line.to_string(),
            });
        }
        Ok(Self {
            environment: fields[0].to_string(),
            hostname: fields[1].to_string(),
            ip_address: fields[2].to_string(),
            username: fields[3].to_string(),
            password: fields[4].to_string(),
        })
    }

    /// Fields in column order: environment, hostname, ip_address, username, password.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.environment,
            &self.hostname,
            &self.ip_address,
            &self.username,
            &self.password,
        ]
    }

    /// Owned cells for table rendering and file output.
    pub fn to_row(&self) -> Vec<String> {
        self.fields().iter().map(|f| f.to_string()).collect()
    }
}

/// Open handle to the warp database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating directories and file if absent) the per-user database
    /// and ensure both table schemas exist.
    pub fn open() -> Result<Self, StoreError> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;
        Self::open_at(dir.join(DB_FILE))
    }

    /// Open a database at an explicit path. Used by `open()` and by tests.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS main(
                environment TEXT, hostname TEXT, ip_address TEXT,
                username TEXT, password TEXT
            );
            -- Reserved schema, not used by any operation yet
            CREATE TABLE IF NOT EXISTS alias(
                name TEXT, ip_address TEXT, username TEXT, password TEXT
            );
            "#,
        )?;
        Ok(Self { conn })
    }

    fn config_dir() -> Result<PathBuf, StoreError> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        directories::ProjectDirs::from("", "", "warp")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(StoreError::NoConfigDir)
    }

    /// Column names of the connection table, derived from the schema rather
    /// than hardcoded; used for table headers and the output file header.
    pub fn columns(&self) -> Result<Vec<String>, StoreError> {
        let stmt = self.conn.prepare("SELECT * FROM main")?;
        Ok(stmt.column_names().iter().map(|s| s.to_string()).collect())
    }

    /// Append all records in one transaction; all rows land or none do.
    pub fn insert_many(&mut self, records: &[ConnectionRecord]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO main VALUES (?1, ?2, ?3, ?4, ?5)")?;
            for record in records {
                stmt.execute(params![
                    record.environment,
                    record.hostname,
                    record.ip_address,
                    record.username,
                    record.password,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// All records in rowid (insertion) order.
    pub fn fetch_all(&self) -> Result<Vec<(i64, ConnectionRecord)>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT rowid, environment, hostname, ip_address, username, password FROM main",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                ConnectionRecord {
                    environment: row.get(1)?,
                    hostname: row.get(2)?,
                    ip_address: row.get(3)?,
                    username: row.get(4)?,
                    password: row.get(5)?,
                },
            ))
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Look up a single record by rowid.
    ///
    /// The id is bound verbatim; a token that is not an integer simply
    /// matches nothing. Missing rows surface as [`StoreError::NotFound`]
    /// carrying the offending selector token.
    pub fn fetch_by_id(&self, id: &str) -> Result<(i64, ConnectionRecord), StoreError> {
        self.conn
            .query_row(
                "SELECT rowid, environment, hostname, ip_address, username, password
                 FROM main WHERE rowid = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get(0)?,
                        ConnectionRecord {
                            environment: row.get(1)?,
                            hostname: row.get(2)?,
                            ip_address: row.get(3)?,
                            username: row.get(4)?,
                            password: row.get(5)?,
                        },
                    ))
                },
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Delete the given rowids in one transaction.
    ///
    /// Callers validate every id with [`Store::fetch_by_id`] first; a delete
    /// batch containing a missing id must never be partially applied.
    pub fn delete_by_ids(&mut self, ids: &[String]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM main WHERE rowid = ?1")?;
            for id in ids {
                stmt.execute(params![id])?;
            }
        }
        tx.commit()?;
        Ok(ids.len())
    }

    /// Commit pending writes and release the handle. Called exactly once per
    /// process, on success and aborted paths alike.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, Store) {
        let tmp = TempDir::new().unwrap();
        let store = Store::open_at(tmp.path().join("warp.db")).unwrap();
        (tmp, store)
    }

    fn record(env: &str, host: &str) -> ConnectionRecord {
        ConnectionRecord {
            environment: env.to_string(),
            hostname: host.to_string(),
            ip_address: "10.0.0.1".to_string(),
            username: "bob".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn parse_line_roundtrips_five_fields() {
        let rec = ConnectionRecord::parse_line("prod,host1,1.2.3.4,bob,secret").unwrap();
        assert_eq!(rec.fields(), ["prod", "host1", "1.2.3.4", "bob", "secret"]);
    }

    #[test]
    fn parse_line_rejects_wrong_arity() {
        let err = ConnectionRecord::parse_line("prod,1.2.3.4,bob,secret").unwrap_err();
        assert!(matches!(err, StoreError::Arity { got: 4, .. }));

        let err = ConnectionRecord::parse_line("a,b,c,d,e,f").unwrap_err();
        assert!(matches!(err, StoreError::Arity { got: 6, .. }));
    }

    #[test]
    fn parse_line_keeps_empty_fields() {
        let rec = ConnectionRecord::parse_line("prod,host1,1.2.3.4,bob,").unwrap();
        assert_eq!(rec.password, "");
    }

    #[test]
    fn insert_then_fetch_preserves_order_with_increasing_ids() {
        let (_tmp, mut store) = open_temp();
        let records = vec![record("dev", "a"), record("stage", "b"), record("prod", "c")];
        assert_eq!(store.insert_many(&records).unwrap(), 3);

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        let ids: Vec<i64> = all.iter().map(|(id, _)| *id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        let fetched: Vec<ConnectionRecord> = all.into_iter().map(|(_, r)| r).collect();
        assert_eq!(fetched, records);
    }

    #[test]
    fn columns_come_from_schema_in_declared_order() {
        let (_tmp, store) = open_temp();
        assert_eq!(
            store.columns().unwrap(),
            ["environment", "hostname", "ip_address", "username", "password"]
        );
    }

    #[test]
    fn fetch_by_id_reports_missing_rows() {
        let (_tmp, mut store) = open_temp();
        store.insert_many(&[record("prod", "a")]).unwrap();

        assert!(store.fetch_by_id("1").is_ok());
        assert!(matches!(
            store.fetch_by_id("9"),
            Err(StoreError::NotFound(id)) if id == "9"
        ));
        // Non-integer tokens are bound verbatim and simply match nothing
        assert!(matches!(
            store.fetch_by_id("bogus"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_rows_without_renumbering() {
        let (_tmp, mut store) = open_temp();
        store
            .insert_many(&[record("dev", "a"), record("stage", "b"), record("prod", "c")])
            .unwrap();

        store.delete_by_ids(&["2".to_string()]).unwrap();

        let ids: Vec<i64> = store.fetch_all().unwrap().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn reopen_is_idempotent_and_keeps_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("warp.db");

        let mut store = Store::open_at(&path).unwrap();
        store.insert_many(&[record("prod", "a")]).unwrap();
        store.close().unwrap();

        let store = Store::open_at(&path).unwrap();
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }
}
