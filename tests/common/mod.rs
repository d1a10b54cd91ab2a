#![allow(dead_code)]

use rusqlite::types::Value;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Same DDL the uploader used to create its table.
pub const LEGACY_SCHEMA: &str = "CREATE TABLE uploaded_vods (
    id text, pubtime text, title text, starttime text, endtime text,
    ogthumbnail text, thumbnail text, thumbnailpath text, path text,
    duration integer, claim text, lbry_name text, lbry_normalized_name text,
    lbry_permanent_url text
);";

// Untyped columns keep whatever storage class the migrator writes.
pub const CURRENT_SCHEMA: &str = "CREATE TABLE uploaded_vods (
    platform, id, playback_url, pub_time, title, start_time, end_time,
    thumbnail, thumbnail_path, path, duration, claim, lbry_name,
    lbry_channel, lbry_normalized_name, lbry_permanent_url
);";

pub const CURRENT_SCHEMA_UNIQUE_ID: &str = "CREATE TABLE uploaded_vods (
    platform, id PRIMARY KEY, playback_url, pub_time, title, start_time,
    end_time, thumbnail, thumbnail_path, path, duration, claim, lbry_name,
    lbry_channel, lbry_normalized_name, lbry_permanent_url
);";

// Violations of a deferred foreign key only surface at COMMIT.
pub const CURRENT_SCHEMA_DEFERRED_FK: &str = "CREATE TABLE claims (id TEXT PRIMARY KEY);
CREATE TABLE uploaded_vods (
    platform, id, playback_url, pub_time, title, start_time, end_time,
    thumbnail, thumbnail_path, path, duration, claim
        REFERENCES claims(id) DEFERRABLE INITIALLY DEFERRED,
    lbry_name, lbry_channel, lbry_normalized_name, lbry_permanent_url
);";

pub struct Fixture {
    pub tmp: TempDir,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_schemas(LEGACY_SCHEMA, CURRENT_SCHEMA)
    }

    pub fn with_schemas(legacy: &str, current: &str) -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let source = tmp.path().join("old.db");
        let dest = tmp.path().join("new.db");
        Connection::open(&source)
            .expect("open source")
            .execute_batch(legacy)
            .expect("create legacy schema");
        Connection::open(&dest)
            .expect("open dest")
            .execute_batch(current)
            .expect("create current schema");
        Fixture { tmp, source, dest }
    }

    pub fn insert_legacy(&self, id: i64, lbry_name: &str) {
        insert_legacy_row(&self.source, Value::Integer(id), lbry_name);
    }

    pub fn dest_rows(&self) -> Vec<Vec<Value>> {
        read_rows(&self.dest)
    }

    pub fn dest_count(&self) -> i64 {
        Connection::open(&self.dest)
            .expect("open dest")
            .query_row("SELECT COUNT(*) FROM uploaded_vods", [], |row| row.get(0))
            .expect("count rows")
    }
}

/// Inserts the reference row `(id, 100, "T", 0, 5, _, "th", "tp", "p", 5, "c", name, "n", "u")`.
/// The text columns store `id`, `100`, `0` and `5` as TEXT.
pub fn insert_legacy_row(path: &Path, id: Value, lbry_name: &str) {
    let conn = Connection::open(path).expect("open source");
    conn.execute(
        "INSERT INTO uploaded_vods VALUES (?1, 100, 'T', 0, 5, 'ogth', 'th', 'tp', 'p', 5, 'c', ?2, 'n', 'u')",
        params![id, lbry_name],
    )
    .expect("insert legacy row");
}

pub fn read_rows(path: &Path) -> Vec<Vec<Value>> {
    let conn = Connection::open(path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT * FROM uploaded_vods ORDER BY rowid")
        .expect("prepare select");
    let columns = stmt.column_count();
    let rows = stmt
        .query_map([], |row| {
            (0..columns)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<Value>>>()
        })
        .expect("query rows")
        .collect::<Result<Vec<_>, _>>()
        .expect("decode rows");
    rows
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}
