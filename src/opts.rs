//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0", value_parser = parse_sample_rate)]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Web(WebOpts),
    Analyze(AnalyzeOpts),
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "::", env = "REGRESSION_API_HOST")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8000", env = "REGRESSION_API_PORT")]
    pub port: u16,
}

/// Fits a line on a single analysis request and prints the result
#[derive(Args)]
pub struct AnalyzeOpts {
    /// JSON request file, standard input by default
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_sample_rate(value: &str) -> crate::Result<f32> {
    let sample_rate: f32 = value.parse()?;
    if (0.0..=1.0).contains(&sample_rate) {
        Ok(sample_rate)
    } else {
        Err(crate::prelude::anyhow!("{} is not within [0, 1]", sample_rate))
    }
}
