use poem::handler;
use poem::web::Json;

use crate::prelude::*;
use crate::statistics::{describe, sample_standard_normal, Summary, SAMPLE_SIZE};

/// Summarises a fresh standard normal sample.
#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get() -> Result<Json<Summary>> {
    let sample = sample_standard_normal(&mut rand::thread_rng(), SAMPLE_SIZE)?;
    Ok(Json(describe(&sample)?))
}
