use poem::http::StatusCode;
use poem::web::Json;
use poem::{handler, IntoResponse, Response};

use crate::analyze::analyze;
use crate::models::{AnalyzeRequest, ErrorResponse};
use crate::prelude::*;

/// Fits a least-squares line on the request data and predicts `y` at `predict_x`.
#[handler]
#[instrument(level = "info", skip_all)]
pub async fn post(Json(request): Json<AnalyzeRequest>) -> Response {
    debug!(n_points = request.data.len(), request.predict_x);
    match analyze(&request) {
        Ok(response) => {
            info!(response.data_points, response.prediction);
            Json(response).into_response()
        }
        Err(error) => {
            info!(n_points = request.data.len(), kind = error.kind(), "{:#}", error);
            Json(ErrorResponse::from(error))
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response()
        }
    }
}
