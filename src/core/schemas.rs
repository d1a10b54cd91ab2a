//! Table and statement definitions for both sides of the migration.
//!
//! The tool never issues DDL: both tables must already exist.

/// Table name shared by the legacy and the current schema.
pub const VODS_TABLE: &str = "uploaded_vods";

/// Minimum number of columns a legacy row must carry.
pub const SOURCE_COLUMN_COUNT: usize = 14;

/// Positions of the legacy columns. Index 5 is carried by old databases but
/// has no counterpart in the current schema.
pub mod source_index {
    pub const ID: usize = 0;
    pub const PUB_TIME: usize = 1;
    pub const TITLE: usize = 2;
    pub const START_TIME: usize = 3;
    pub const END_TIME: usize = 4;
    pub const THUMBNAIL: usize = 6;
    pub const THUMBNAIL_PATH: usize = 7;
    pub const PATH: usize = 8;
    pub const DURATION: usize = 9;
    pub const CLAIM: usize = 10;
    pub const LBRY_NAME: usize = 11;
    pub const LBRY_NORMALIZED_NAME: usize = 12;
    pub const LBRY_PERMANENT_URL: usize = 13;
}

/// Destination columns, in insert order.
pub const DEST_COLUMNS: [&str; 16] = [
    "platform",
    "id",
    "playback_url",
    "pub_time",
    "title",
    "start_time",
    "end_time",
    "thumbnail",
    "thumbnail_path",
    "path",
    "duration",
    "claim",
    "lbry_name",
    "lbry_channel",
    "lbry_normalized_name",
    "lbry_permanent_url",
];

pub const SELECT_ALL_VODS: &str = "SELECT * FROM uploaded_vods";

pub const INSERT_VOD: &str = "INSERT INTO uploaded_vods (platform, id, playback_url, pub_time, title, start_time, end_time, thumbnail, thumbnail_path, path, duration, claim, lbry_name, lbry_channel, lbry_normalized_name, lbry_permanent_url) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)";
