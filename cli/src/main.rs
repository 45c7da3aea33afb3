//! nullscope CLI - assemble a person from the config file or the environment.
//!
//! ```text
//! main() -> Args::parse() -> load_config() -> init_tracing() -> run() -> Report
//!                                                                    |
//!                                                   Complete (exit 0) | Incomplete (exit 1)
//! ```
//!
//! Errors from a broken source or an unreadable config exit with status 2.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{io, path::Path, path::PathBuf, process::ExitCode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nullscope_config::{NullscopeConfig, config_path};
use nullscope_core::{EnvSource, PersonSource, ProfileSource};

use crate::render::{Format, Report};

/// Exit status for a broken source or an unreadable config.
const ERROR_STATUS: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "nullscope", version, about)]
struct Args {
    /// Config file to read instead of ~/.nullscope/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to read the person's fields from.
    #[arg(long, value_enum, default_value_t = SourceKind::Profile)]
    source: SourceKind,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// The `[profile]` table of the config file.
    Profile,
    /// NULLSCOPE_NAME, NULLSCOPE_AGE and NULLSCOPE_EMAIL.
    Env,
}

fn init_tracing(config_level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the report; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<NullscopeConfig> {
    match path {
        Some(path) => NullscopeConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(NullscopeConfig::load()
            .context("loading default config")?
            .unwrap_or_default()),
    }
}

/// The file `load_config` reads for `path`, if any.
fn config_location(path: Option<&Path>) -> Option<PathBuf> {
    path.map(Path::to_path_buf).or_else(config_path)
}

fn run(args: &Args, config: &NullscopeConfig) -> Result<Report> {
    let profile;
    let env;
    let source: &dyn PersonSource = match args.source {
        SourceKind::Profile => {
            profile = ProfileSource::new(config);
            &profile
        }
        SourceKind::Env => {
            env = EnvSource::from_process();
            &env
        }
    };

    let format = if args.json { Format::Json } else { Format::Text };
    tracing::debug!(source = ?args.source, ?format, "Assembling person");
    render::report(source, format)
}

fn exit_status(outcome: &Result<Report>) -> u8 {
    match outcome {
        Ok(report) => report.status(),
        Err(_) => ERROR_STATUS,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The log level lives in the config, so loading happens before any
    // subscriber exists; its outcome is logged once tracing is up.
    let config = load_config(args.config.as_deref());
    init_tracing(config.as_ref().ok().and_then(NullscopeConfig::log_level));
    let location = config_location(args.config.as_deref());
    match &config {
        Ok(_) => tracing::debug!(path = ?location, "Config resolved"),
        Err(_) => tracing::debug!(path = ?location, "Config could not be loaded"),
    }

    let outcome = config.and_then(|config| run(&args, &config));
    match &outcome {
        Ok(report) => println!("{}", report.text()),
        Err(err) => eprintln!("Error: {err:?}"),
    }
    ExitCode::from(exit_status(&outcome))
}
