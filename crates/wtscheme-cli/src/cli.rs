use std::path::{Path, PathBuf};

use clap::Parser;
use wtscheme_config::{default_config_path, AppConfig, LogLevel};

/// Translate X color schemes to Windows Terminal format.
#[derive(Parser, Debug)]
#[command(name = "xrdb2wt", version, about)]
pub struct Args {
    /// Path to an xrdb file or a directory of xrdb files.
    pub xrdb_path: PathBuf,

    /// Directory where the .json files will be created. Printed to stdout if omitted.
    #[arg(short = 'd', long = "destiny", value_name = "DIR")]
    pub destiny: Option<PathBuf>,

    /// Config file path override.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// `--destiny` wins over `output.destination` from the config.
    pub fn destination<'a>(&'a self, config: &'a AppConfig) -> Option<&'a Path> {
        self.destiny
            .as_deref()
            .or(config.output.destination.as_deref())
    }

    /// Config file that was (or would have been) read.
    pub fn config_location(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| default_config_path().ok())
    }

    /// Filter directive for the log subscriber.
    pub fn log_directive(&self, level: LogLevel) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| level.as_directive().to_string())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
