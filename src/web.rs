use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::{
    ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware, TimeItMiddleware,
};

mod middleware;
#[cfg(test)]
mod test;
mod views;

/// Runs the web application.
#[instrument(skip_all, fields(host = %opts.host, port = opts.port))]
pub async fn run(opts: WebOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));

    let address = (IpAddr::from_str(&opts.host)?, opts.port);
    info!("listening…");
    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(create_standalone_app(), shutdown_signal(), None)
        .await?;
    info!("stopped");
    Ok(())
}

pub fn create_standalone_app() -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/health", get(views::health::get))
        .at("/analyze", post(views::analyze::post))
        .at("/stats", get(views::stats::get))
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(TimeItMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
    }
    info!("shutting down…");
}
