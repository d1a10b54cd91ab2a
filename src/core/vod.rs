//! Legacy and current shapes of an uploaded VOD row, and the transform between them.
//!
//! Copied fields are kept as [`Value`] so whatever storage class the legacy
//! database used (INTEGER, TEXT, ...) is written back unchanged.

use crate::core::error::MigrateError;
use crate::core::schemas::source_index as idx;
use rusqlite::types::Value;
use rusqlite::{Row, Statement, params};

/// Separator between the VOD id and the platform tag in an LBRY claim name.
pub const PLATFORM_DELIMITER: &str = "-r-";

/// Platform assumed for claims named before the tag existed.
pub const DEFAULT_PLATFORM: &str = "youtube";

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub id: Value,
    pub pub_time: Value,
    pub title: Value,
    pub start_time: Value,
    pub end_time: Value,
    pub thumbnail: Value,
    pub thumbnail_path: Value,
    pub path: Value,
    pub duration: Value,
    pub claim: Value,
    pub lbry_name: Value,
    pub lbry_normalized_name: Value,
    pub lbry_permanent_url: Value,
}

impl SourceRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(SourceRow {
            id: row.get(idx::ID)?,
            pub_time: row.get(idx::PUB_TIME)?,
            title: row.get(idx::TITLE)?,
            start_time: row.get(idx::START_TIME)?,
            end_time: row.get(idx::END_TIME)?,
            thumbnail: row.get(idx::THUMBNAIL)?,
            thumbnail_path: row.get(idx::THUMBNAIL_PATH)?,
            path: row.get(idx::PATH)?,
            duration: row.get(idx::DURATION)?,
            claim: row.get(idx::CLAIM)?,
            lbry_name: row.get(idx::LBRY_NAME)?,
            lbry_normalized_name: row.get(idx::LBRY_NORMALIZED_NAME)?,
            lbry_permanent_url: row.get(idx::LBRY_PERMANENT_URL)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestRow {
    pub platform: String,
    pub id: Value,
    pub playback_url: String,
    pub pub_time: Value,
    pub title: Value,
    pub start_time: Value,
    pub end_time: Value,
    pub thumbnail: Value,
    pub thumbnail_path: Value,
    pub path: Value,
    pub duration: Value,
    pub claim: Value,
    pub lbry_name: String,
    pub lbry_channel: String,
    pub lbry_normalized_name: Value,
    pub lbry_permanent_url: Value,
}

impl DestRow {
    /// Builds the current-schema row. Fails when the claim name is not text
    /// or carries no platform segment.
    pub fn from_source(src: SourceRow, channel: &str) -> Result<Self, MigrateError> {
        let lbry_name = match src.lbry_name {
            Value::Text(name) => name,
            Value::Null => {
                return Err(MigrateError::TransformError {
                    id: describe_value(&src.id),
                    lbry_name: None,
                    reason: "lbry_name is NULL".to_string(),
                });
            }
            other => {
                return Err(MigrateError::TransformError {
                    id: describe_value(&src.id),
                    lbry_name: Some(describe_value(&other)),
                    reason: "lbry_name is not text".to_string(),
                });
            }
        };
        let Some(platform) = derive_platform(&lbry_name) else {
            return Err(MigrateError::TransformError {
                id: describe_value(&src.id),
                lbry_name: Some(lbry_name),
                reason: format!("missing '{}' delimiter", PLATFORM_DELIMITER),
            });
        };

        Ok(DestRow {
            platform,
            id: src.id,
            playback_url: String::new(),
            pub_time: src.pub_time,
            title: src.title,
            start_time: src.start_time,
            end_time: src.end_time,
            thumbnail: src.thumbnail,
            thumbnail_path: src.thumbnail_path,
            path: src.path,
            duration: src.duration,
            claim: src.claim,
            lbry_name,
            lbry_channel: channel.to_string(),
            lbry_normalized_name: src.lbry_normalized_name,
            lbry_permanent_url: src.lbry_permanent_url,
        })
    }

    /// Executes the prepared insert with this row's values in `DEST_COLUMNS` order.
    pub fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.platform,
            self.id,
            self.playback_url,
            self.pub_time,
            self.title,
            self.start_time,
            self.end_time,
            self.thumbnail,
            self.thumbnail_path,
            self.path,
            self.duration,
            self.claim,
            self.lbry_name,
            self.lbry_channel,
            self.lbry_normalized_name,
            self.lbry_permanent_url,
        ])
    }
}

/// Extracts the platform tag from a claim name of the form
/// `<vod id>-r-<platform><nonce>`.
///
/// Takes the segment after the first delimiter (up to the next one, if any)
/// and drops digits in any script. An all-digit segment maps to [`DEFAULT_PLATFORM`].
/// Returns `None` when the delimiter is absent.
pub fn derive_platform(lbry_name: &str) -> Option<String> {
    let segment = lbry_name.split(PLATFORM_DELIMITER).nth(1)?;
    let platform: String = segment.chars().filter(|c| !c.is_numeric()).collect();
    if platform.is_empty() {
        Some(DEFAULT_PLATFORM.to_string())
    } else {
        Some(platform)
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}
