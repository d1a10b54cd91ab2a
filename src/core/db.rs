use crate::core::error::MigrateError;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

const WRITE_BUSY_TIMEOUT_SECS: u64 = 5;

/// Opens the legacy database read-only. The file must already exist.
pub fn open_source(path: &Path) -> Result<Connection, MigrateError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(connection_error(path))?;
    probe(&conn).map_err(connection_error(path))?;
    Ok(conn)
}

/// Opens the destination database for writing. Never creates the file:
/// the destination schema has to be in place before the migration runs.
pub fn open_dest(path: &Path) -> Result<Connection, MigrateError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(connection_error(path))?;
    probe(&conn).map_err(connection_error(path))?;
    conn.busy_timeout(Duration::from_secs(WRITE_BUSY_TIMEOUT_SECS))
        .map_err(connection_error(path))?;
    conn.execute("PRAGMA foreign_keys=ON;", [])
        .map_err(connection_error(path))?;
    Ok(conn)
}

// SQLite opens lazily; reading the header is what rejects non-database files.
fn probe(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA schema_version;", [], |row| row.get(0))
}

fn connection_error(path: &Path) -> impl Fn(rusqlite::Error) -> MigrateError + '_ {
    move |source| MigrateError::ConnectionError {
        path: path.to_path_buf(),
        source,
    }
}
