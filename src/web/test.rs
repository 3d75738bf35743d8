use poem::http::StatusCode;
use poem::test::{TestClient, TestResponse};
use serde_json::{json, Value};

use crate::prelude::*;
use crate::web::create_standalone_app;

async fn read_json(response: TestResponse) -> Result<Value> {
    response
        .0
        .into_body()
        .into_json()
        .await
        .map_err(|error| anyhow!("failed to read the response body: {:#}", error))
}

#[tokio::test]
async fn get_index_ok() {
    let client = TestClient::new(create_standalone_app());
    let response = client.get("/").send().await;
    response.assert_status_is_ok();
    response
        .assert_json(json!({"message": "Regression API", "status": "running"}))
        .await;
}

#[tokio::test]
async fn get_health_ok() {
    let client = TestClient::new(create_standalone_app());
    let response = client.get("/health").send().await;
    response.assert_status_is_ok();
    response.assert_header("Cache-Control", "no-cache");
    response.assert_header("X-Content-Type-Options", "nosniff");
    response.assert_json(json!({"status": "healthy"})).await;
}

#[tokio::test]
async fn post_analyze_exact_fit_ok() {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({
            "data": [{"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 2, "y": 2}],
            "predict_x": 5,
        }))
        .send()
        .await;
    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "prediction": 5.0,
            "coefficient": 1.0,
            "intercept": 0.0,
            "data_points": 3,
        }))
        .await;
}

#[tokio::test]
async fn post_analyze_known_regression_ok() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({
            "data": [{"x": 1, "y": 2}, {"x": 2, "y": 3}, {"x": 3, "y": 5}, {"x": 4, "y": 6}],
            "predict_x": 5,
        }))
        .send()
        .await;
    response.assert_status_is_ok();
    let body = read_json(response).await?;
    assert!((body["prediction"].as_f64().context("prediction")? - 7.5).abs() < 1e-12);
    assert!((body["coefficient"].as_f64().context("coefficient")? - 1.4).abs() < 1e-12);
    assert!((body["intercept"].as_f64().context("intercept")? - 0.5).abs() < 1e-12);
    assert_eq!(body["data_points"], 4);
    Ok(())
}

#[tokio::test]
async fn post_analyze_empty_dataset_fails() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({"data": [], "predict_x": 1}))
        .send()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await?;
    assert_eq!(body["error"], "empty_dataset");
    assert_eq!(body["message"], "no data points supplied");
    Ok(())
}

#[tokio::test]
async fn post_analyze_degenerate_input_fails() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({
            "data": [{"x": 1, "y": 5}, {"x": 1, "y": 7}, {"x": 1, "y": 9}],
            "predict_x": 2,
        }))
        .send()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await?;
    assert_eq!(body["error"], "degenerate_input");
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn post_analyze_numeric_overflow_fails() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({
            "data": [{"x": 1e200, "y": 1}, {"x": -1e200, "y": 2}, {"x": 3e200, "y": 0}],
            "predict_x": 0,
        }))
        .send()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await?;
    assert_eq!(body["error"], "numeric_overflow");
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn post_analyze_large_offset_ok() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .body_json(&json!({
            "data": [{"x": 1e6, "y": 0}, {"x": 1e6 + 1.0, "y": 1}, {"x": 1e6 + 2.0, "y": 2}],
            "predict_x": 1e6 + 3.0,
        }))
        .send()
        .await;
    response.assert_status_is_ok();
    let body = read_json(response).await?;
    assert_eq!(body["coefficient"], 1.0);
    assert_eq!(body["prediction"], 3.0);
    Ok(())
}

#[tokio::test]
async fn post_analyze_malformed_fails() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client
        .post("/analyze")
        .content_type("application/json")
        .body(r#"{"data": [{"x": 1}], "predict_x": 2}"#)
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = read_json(response).await?;
    assert_eq!(body["error"], "invalid_request");
    Ok(())
}

#[tokio::test]
async fn get_stats_ok() -> Result {
    let client = TestClient::new(create_standalone_app());
    let response = client.get("/stats").send().await;
    response.assert_status_is_ok();
    let body = read_json(response).await?;
    let min = body["min"].as_f64().context("min")?;
    let max = body["max"].as_f64().context("max")?;
    let mean = body["mean"].as_f64().context("mean")?;
    assert!(min <= mean && mean <= max);
    assert!(body["std"].as_f64().context("std")? > 0.0);
    Ok(())
}

#[tokio::test]
async fn not_found_ok() {
    let client = TestClient::new(create_standalone_app());
    let response = client.get("/missing").send().await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn method_not_allowed_ok() {
    let client = TestClient::new(create_standalone_app());
    let response = client.get("/analyze").send().await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
