//! uaprobe config command

use clap::Args;
use std::{io::Write, path::PathBuf};
use uaprobe::error::{BoxError, ErrorContext as _};

#[derive(Debug, Args)]
/// print the effective classifier configuration as JSON
pub struct CliCommandConfig {
    #[arg(long, short = 'c')]
    /// JSON file overriding (some of) the default heuristic cutoffs
    config: Option<PathBuf>,
}

/// run the uaprobe config command
pub fn run(cfg: CliCommandConfig) -> Result<(), BoxError> {
    let config = super::load_config(cfg.config.as_deref())?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &config).context("write config as json")?;
    writeln!(out).context("write trailing newline")?;

    Ok(())
}
