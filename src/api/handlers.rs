//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{CompensationInput, TaxCalculation};
use crate::presentation::summary_lines;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Returns the full-precision result with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match accept_request(&state, payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let (result, audit_trace) = state.engine().compute_traced(&input);
    info!(
        correlation_id = %correlation_id,
        regime = %state.regime_code(),
        period = input.period.as_str(),
        taxable_income = %result.taxable_income,
        annual_tax = %result.annual_tax,
        duration_us = audit_trace.duration_us,
        "Calculation completed successfully"
    );

    let calculation = TaxCalculation {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regime: state.regime_code().to_string(),
        input,
        result,
        audit_trace,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(calculation),
    )
        .into_response()
}

/// Handler for POST /calculate/summary endpoint.
///
/// Returns the result rendered as formatted, labelled lines.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let input = match accept_request(&state, payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let result = state.engine().compute(&input);
    info!(
        correlation_id = %correlation_id,
        annual_tax = %result.annual_tax,
        "Summary completed successfully"
    );

    let response = SummaryResponse {
        calculation_id: correlation_id,
        regime: state.regime_code().to_string(),
        lines: summary_lines(&result),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Unwraps the JSON body and applies caller-side validation.
fn accept_request(
    state: &AppState,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CompensationInput, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return Err(ApiErrorResponse::bad_request(rejection_to_error(
                rejection,
                correlation_id,
            )));
        }
    };

    let months_per_year = state.engine().regime().reliefs().months_per_year;
    if let Err(err) = request.validate(months_per_year) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request failed validation"
        );
        return Err(err.into());
    }

    Ok(request.into())
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::{Body, Bytes};
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::statutory())
    }

    async fn post(router: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let (status, body) = post(
            router,
            "/calculate",
            r#"{"basic_salary": 100000, "housing_allowance": 20000, "transport_allowance": 10000}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let calculation: TaxCalculation = serde_json::from_slice(&body).unwrap();
        assert_eq!(calculation.regime, "NG-PITA-2011");
        assert_eq!(calculation.result.annual_tax, Decimal::new(97_980, 0));
        assert_eq!(calculation.audit_trace.steps.len(), 8);
    }

    #[tokio::test]
    async fn test_response_has_json_content_type() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"basic_salary": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = post(router, "/calculate", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_basic_salary_returns_validation_error() {
        let router = create_router(create_test_state());
        let (status, body) = post(router, "/calculate", r#"{"housing_allowance": 1}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("basic_salary"));
    }

    #[tokio::test]
    async fn test_negative_amount_returns_invalid_input() {
        let router = create_router(create_test_state());
        let (status, body) = post(router, "/calculate", r#"{"basic_salary": -1}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_oversized_salary_returns_invalid_input() {
        let router = create_router(create_test_state());
        let (status, body) = post(
            router,
            "/calculate",
            r#"{"basic_salary": "10000000000000000000000000000"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_summary_endpoint_formats_lines() {
        let router = create_router(create_test_state());
        let (status, body) = post(
            router,
            "/calculate/summary",
            r#"{"basic_salary": 100000, "housing_allowance": 20000, "transport_allowance": 10000}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary: SummaryResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.lines.len(), 7);
        assert_eq!(summary.lines[6].label, "Monthly PAYE");
        assert_eq!(summary.lines[6].value, "₦8,165.00");
    }
}
