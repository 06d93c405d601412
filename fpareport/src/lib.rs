use clap::Parser;
use fpa_core::analytics::PriceAnalytics;
use fpa_sqlite::Db;
use std::{io::Write as _, path::PathBuf};

mod config;
pub use config::AppConfig;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

/// Query and load fuel price records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "APP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Where to write the JSON report ("-" implies stdout)
    #[arg(short, long, default_value = "-", global = true, value_parser = clap::value_parser!(PathOrStd))]
    pub output: PathOrStd,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { database } = AppConfig::load(self.config.as_deref())?;
        if self.command.is_write() && database.database_path.is_none() {
            tracing::warn!(
                "no database.database_path configured, imported records will not outlive this run"
            );
        }
        let db = Db::open(&database).await?;
        let analytics = PriceAnalytics::new(db);

        let report = self.command.run(&analytics).await?;

        let mut output = self.output.write()?;
        serde_json::to_writer_pretty(&mut output, &report)?;
        writeln!(output)?;
        output.flush()?;

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("config file {0} does not exist")]
    MissingConfig(PathBuf),
    #[error("expected a date formatted as YYYY-MM-DD, got \"{0}\"")]
    InvalidDate(String),
}
