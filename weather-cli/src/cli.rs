use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use weather_card_core::{Mode, OpenMeteoProvider, SHENZHEN, refresh};

/// Top-level CLI struct. Location and units are compiled in.
#[derive(Debug, Parser)]
#[command(
    name = "weather-card",
    version,
    about = "Refresh the weather card between <!-- WEATHER-START --> and <!-- WEATHER-END -->"
)]
pub struct Cli {
    /// Document containing the weather sentinels.
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Print the rendered card and report whether the document would change, without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let provider = OpenMeteoProvider::new().context("Failed to build HTTP client")?;
        let mode = if self.dry_run { Mode::DryRun } else { Mode::Write };
        tracing::debug!(readme = %self.readme.display(), ?mode, "Refreshing weather card");

        let outcome = refresh(&provider, &SHENZHEN, &self.readme, mode)
            .await
            .with_context(|| format!("Failed to refresh {}", self.readme.display()))?;

        if self.dry_run {
            println!("{}", outcome.block);
        }

        if outcome.changed {
            println!("{} 已更新天气卡片。", self.readme.display());
        } else {
            println!("内容未变化，无需更新。");
        }

        Ok(())
    }
}
