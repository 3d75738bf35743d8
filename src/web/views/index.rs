use poem::handler;
use poem::web::Json;
use serde::Serialize;

use crate::prelude::*;

#[derive(Serialize)]
pub struct Index {
    message: &'static str,
    status: &'static str,
}

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get() -> Json<Index> {
    Json(Index { message: "Regression API", status: "running" })
}
