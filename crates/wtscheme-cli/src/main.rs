//! xrdb2wt: convert xrdb color schemes to terminal color-customization JSON.
//!
//! Prints each converted scheme to stdout, or writes `<name>.json` files
//! into the `--destiny` directory. Logs go to stderr.

mod cli;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wtscheme_config::AppConfig;
use wtscheme_convert::{RunOptions, RunSummary};
use wtscheme_xrdb::XrdbReader;

use crate::cli::Args;

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the conversion described by `args` and `config`.
fn convert(args: &Args, config: &AppConfig) -> wtscheme_common::Result<RunSummary> {
    let reader = XrdbReader::new().with_extensions(config.source.extensions.iter().cloned());
    let options = RunOptions {
        indent: config.output.indent,
    };
    let destination = args.destination(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    wtscheme_convert::run(&reader, &args.xrdb_path, destination, &mut out, &options)
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match wtscheme_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The subscriber needs the configured level, so config loading itself runs unlogged.
    init_logging(&args.log_directive(config.logging.level));
    if let Some(path) = args.config_location().filter(|p| p.exists()) {
        tracing::info!("loaded config from {}", path.display());
    }
    tracing::debug!(
        path = %args.xrdb_path.display(),
        "xrdb2wt v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    match convert(&args, &config) {
        Ok(summary) => {
            tracing::debug!(
                converted = summary.converted,
                written = summary.written.len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
