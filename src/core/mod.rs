pub mod db;
pub mod error;
pub mod migration;
pub mod schemas;
pub mod vod;
