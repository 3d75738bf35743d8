//! JSON request and response bodies shared by the web application and the CLI.

use serde::{Deserialize, Serialize};

use crate::regression::{DataPoint, FitError, FitResult};

#[derive(Deserialize, Serialize, Debug)]
pub struct AnalyzeRequest {
    pub data: Vec<DataPoint>,
    pub predict_x: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AnalyzeResponse {
    pub prediction: f64,

    /// Slope of the fitted line.
    pub coefficient: f64,

    pub intercept: f64,
    pub data_points: usize,
}

impl From<FitResult> for AnalyzeResponse {
    fn from(result: FitResult) -> Self {
        Self {
            prediction: result.predicted_value,
            coefficient: result.slope,
            intercept: result.intercept,
            data_points: result.n_points,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self { error, message: message.into() }
    }
}

impl From<FitError> for ErrorResponse {
    fn from(error: FitError) -> Self {
        Self::new(error.kind(), error.to_string())
    }
}
