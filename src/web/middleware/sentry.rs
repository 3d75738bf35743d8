use std::collections::BTreeMap;

use poem::{Endpoint, Middleware, Request, Result};
use sentry::protocol::Context;
use serde_json::Value;

/// Names the Sentry transaction after the route and attaches the request body metadata.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let transaction = format!("{} {}", request.method(), request.uri().path());
        let body = body_context(&request);
        let remote_addr = request.remote_addr().to_string();
        sentry::configure_scope(|scope| {
            scope.set_transaction(Some(transaction.as_str()));
            scope.set_tag("request.remote_addr", remote_addr);
            scope.set_context("body", Context::Other(body));
        });
        self.ep.call(request).await
    }
}

fn body_context(request: &Request) -> BTreeMap<String, Value> {
    ["Content-Type", "Content-Length"]
        .into_iter()
        .filter_map(|name| {
            let value = request.header(name)?;
            Some((name.to_ascii_lowercase(), Value::from(value)))
        })
        .collect()
}
