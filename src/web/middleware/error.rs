use poem::error::{
    MethodNotAllowedError, NotFoundError, ParseJsonError, ParsePathError, ParseQueryError,
};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::models::ErrorResponse;
use crate::prelude::*;

/// Converts the endpoint errors into JSON error responses.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) if error.is::<NotFoundError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(render(StatusCode::NOT_FOUND, "not_found", "no such endpoint"))
            }
            Err(error) if error.is::<MethodNotAllowedError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(render(
                    StatusCode::METHOD_NOT_ALLOWED,
                    "method_not_allowed",
                    format!("{} is not allowed here", method),
                ))
            }
            Err(error)
                if error.is::<ParseJsonError>()
                    || error.is::<ParseQueryError>()
                    || error.is::<ParsePathError>() =>
            {
                info!(?method, ?uri, "{:#}", error);
                Ok(render(StatusCode::BAD_REQUEST, "invalid_request", error.to_string()))
            }
            Err(error) => {
                error!(?method, ?uri, "{:#}", error);
                Ok(render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error",
                ))
            }
            result => result,
        }
    }
}

pub fn render(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Response {
    Json(ErrorResponse::new(kind, message))
        .with_status(status)
        .into_response()
}
