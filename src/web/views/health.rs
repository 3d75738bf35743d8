use poem::web::Json;
use poem::{handler, IntoResponse};
use serde::Serialize;

use crate::prelude::*;

const CACHE_CONTROL: &str = "no-cache";

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get() -> impl IntoResponse {
    Json(Health { status: "healthy" }).with_header("Cache-Control", CACHE_CONTROL)
}
