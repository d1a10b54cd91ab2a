use rusqlite;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Connection error: cannot open {} as a database: {source}", .path.display())]
    ConnectionError {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Query error: {0}")]
    QueryError(#[from] rusqlite::Error),
    #[error("Query error: {table} has {found} columns, expected at least {expected}")]
    ColumnCountError {
        table: &'static str,
        found: usize,
        expected: usize,
    },
    #[error("Transform error: row id={id} lbry_name={lbry_name:?}: {reason}")]
    TransformError {
        id: String,
        lbry_name: Option<String>,
        reason: String,
    },
    #[error("Commit error: {0}")]
    CommitError(#[source] rusqlite::Error),
}
