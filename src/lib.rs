//! vod-migrate: one-shot move of uploaded VOD records into the platform-aware schema.
//!
//! Older uploader databases stored every upload in an `uploaded_vods` table
//! without knowing which streaming platform a VOD came from. The current
//! schema adds `platform`, `playback_url` and `lbry_channel`. This crate reads
//! every legacy row, recovers the platform from the LBRY claim name
//! (`<id>-r-<platform><nonce>`), and inserts the result into an existing
//! destination table in a single transaction.
//!
//! # Examples
//!
//! ```bash
//! # Migrate using the default channel (@odysteve)
//! migrate old.db new.db
//!
//! # Record a different channel on every row
//! migrate --channel @mychannel old.db new.db
//! ```
//!
//! # Crate Structure
//!
//! - [`crate::core::migration`]: the migrator entrypoint and its configuration
//! - [`crate::core::vod`]: legacy/current row types and the platform rule
//! - [`crate::core::db`]: connection setup for both databases
//! - [`crate::core::schemas`]: table and statement definitions
//! - [`crate::core::error`]: error type

pub mod core;

use crate::core::{error, migration};

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "migrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Migrates uploaded_vods rows from an old uploader database into the new schema"
)]
struct Cli {
    /// Odysee channel name recorded on every migrated row.
    #[clap(short, long, default_value = migration::DEFAULT_CHANNEL)]
    channel: String,
    /// Input file: the legacy database.
    infile: PathBuf,
    /// Output file: database that already has the new uploaded_vods table.
    outfile: PathBuf,
}

impl From<Cli> for migration::MigrateConfig {
    fn from(cli: Cli) -> Self {
        migration::MigrateConfig::new(cli.infile, cli.outfile).with_channel(cli.channel)
    }
}

pub fn run() -> Result<(), error::MigrateError> {
    let config: migration::MigrateConfig = Cli::parse().into();

    println!(
        "{} Migrating {} {} {} as {}",
        "▸".bright_cyan(),
        config.source.display().to_string().bright_yellow(),
        "→".bright_white(),
        config.dest.display().to_string().bright_green(),
        config.channel.bright_white().bold()
    );

    let report = migration::run(&config)?;

    println!(
        "{} {} row(s) migrated",
        "✓".bright_green(),
        report.rows
    );
    Ok(())
}
