//! Copies `uploaded_vods` from a legacy uploader database into the
//! platform-aware schema.
//!
//! - **All-or-nothing**: every insert happens inside one transaction that is
//!   committed once at the end and rolled back on any error
//! - **Not idempotent**: running twice against the same destination appends
//!   the rows again unless the destination enforces a unique `id`
//! - **No DDL**: the destination table must already exist

use crate::core::db;
use crate::core::error::MigrateError;
use crate::core::schemas;
use crate::core::vod::{DestRow, SourceRow};
use rusqlite::Connection;
use std::path::PathBuf;

/// Channel written to `lbry_channel` when none is given.
pub const DEFAULT_CHANNEL: &str = "@odysteve";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// Legacy database to read from.
    pub source: PathBuf,
    /// Database holding the current schema, written to.
    pub dest: PathBuf,
    /// Odysee channel recorded on every migrated row.
    pub channel: String,
}

impl MigrateConfig {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        MigrateConfig {
            source: source.into(),
            dest: dest.into(),
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    /// Rows read, transformed and committed.
    pub rows: usize,
}

pub fn run(config: &MigrateConfig) -> Result<MigrationReport, MigrateError> {
    let source = db::open_source(&config.source)?;
    let mut dest = db::open_dest(&config.dest)?;

    let vods = read_source_rows(&source)?;
    let rows = vods.len();

    let tx = dest.transaction()?;
    {
        let mut insert = tx.prepare_cached(schemas::INSERT_VOD)?;
        for vod in vods {
            DestRow::from_source(vod, &config.channel)?.insert(&mut insert)?;
        }
    }
    tx.commit().map_err(MigrateError::CommitError)?;

    Ok(MigrationReport { rows })
}

/// Full scan of the legacy table, decoded into typed rows in storage order.
fn read_source_rows(conn: &Connection) -> Result<Vec<SourceRow>, MigrateError> {
    let mut stmt = conn.prepare(schemas::SELECT_ALL_VODS)?;
    if stmt.column_count() < schemas::SOURCE_COLUMN_COUNT {
        return Err(MigrateError::ColumnCountError {
            table: schemas::VODS_TABLE,
            found: stmt.column_count(),
            expected: schemas::SOURCE_COLUMN_COUNT,
        });
    }
    let rows = stmt
        .query_map([], SourceRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
