use clap::Parser;

use crate::opts::{Command, Opts};
use crate::prelude::*;

mod analyze;
mod logging;
mod models;
mod opts;
mod prelude;
mod regression;
mod statistics;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    match opts.subcommand {
        Command::Web(opts) => web::run(opts).await,
        Command::Analyze(opts) => analyze::run(opts),
    }
}
