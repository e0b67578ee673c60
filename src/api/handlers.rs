//! HTTP request handlers for the payroll register API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::RecordActions;
use crate::export::EXPORT_FILENAME;
use crate::models::{
    Employee, EmployeeForm, EmployeePage, FormattedSummary, ReportSummary, SalaryBreakdown,
};

use super::request::ListQuery;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_handler).post(create_handler))
        .route(
            "/employees/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/salary/preview", post(preview_handler))
        .route("/export/csv", get(export_handler))
        .route("/summary", get(summary_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Option lists for the employee form.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOptions {
    /// Known pay grades.
    pub grades: Vec<String>,
    /// Positions with an allowance rule.
    pub positions: Vec<String>,
    /// The marital status value that counts as married.
    pub married_status: String,
}

/// Pay totals with their display strings.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    /// Raw totals.
    #[serde(flatten)]
    pub summary: ReportSummary,
    /// Totals formatted as Rupiah.
    pub formatted: FormattedSummary,
}

/// Converts a JSON body rejection into an API error, logging it.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Logs a failed action and converts it for the response.
fn action_error(err: crate::error::PayrollError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for GET /employees.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<EmployeePage> {
    let mut app = state.app().lock().await;
    let page = app.search(query.q.as_deref().unwrap_or_default());
    let page = match query.page {
        Some(number) if number != page.page => app.page(number),
        _ => page,
    };
    Json(page)
}

/// Handler for POST /employees.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let Json(form) = payload.map_err(|r| rejection_error(r, correlation_id))?;

    let mut app = state.app().lock().await;
    let employee = app
        .submit(&form, None)
        .map_err(|e| action_error(e, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = ?employee.id,
        net_pay = employee.net_pay,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees/:id.
async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    let app = state.app().lock().await;
    app.edit(id).map(Json).map_err(ApiErrorResponse::from)
}

/// Handler for PUT /employees/:id.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EmployeeForm>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing update request");

    let Json(form) = payload.map_err(|r| rejection_error(r, correlation_id))?;

    let mut app = state.app().lock().await;
    let employee = app
        .submit(&form, Some(id))
        .map_err(|e| action_error(e, correlation_id))?;

    Ok(Json(employee))
}

/// Handler for DELETE /employees/:id.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing delete request");

    let mut app = state.app().lock().await;
    app.delete(id)
        .map_err(|e| action_error(e, correlation_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /salary/preview.
///
/// Recalculates the salary components for a form without saving it.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeForm>, JsonRejection>,
) -> ApiResult<Json<SalaryBreakdown>> {
    let correlation_id = Uuid::new_v4();
    let Json(form) = payload.map_err(|r| rejection_error(r, correlation_id))?;

    let app = state.app().lock().await;
    Ok(Json(app.preview(&form)))
}

/// Handler for GET /export/csv.
async fn export_handler(State(state): State<AppState>) -> ApiResult<Response> {
    let correlation_id = Uuid::new_v4();

    let app = state.app().lock().await;
    let csv = app
        .export()
        .map_err(|e| action_error(e, correlation_id))?;

    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILENAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// Handler for GET /summary.
async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    let app = state.app().lock().await;
    let summary = app.summary();
    Json(SummaryResponse {
        formatted: summary.formatted(),
        summary,
    })
}

/// Handler for GET /rules.
async fn rules_handler(State(state): State<AppState>) -> Json<RuleOptions> {
    let app = state.app().lock().await;
    let rules = app.rules();
    Json(RuleOptions {
        grades: rules.grades().into_iter().map(str::to_string).collect(),
        positions: rules.positions().into_iter().map(str::to_string).collect(),
        married_status: rules.family_allowance.married_status.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PayrollApp;
    use crate::config::SalaryRules;
    use crate::store::EmployeeStore;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = EmployeeStore::open_in_memory().expect("Failed to open store");
        let app = PayrollApp::new(store, SalaryRules::default(), 6).expect("Failed to load app");
        AppState::new(app)
    }

    fn create_valid_form() -> serde_json::Value {
        serde_json::json!({
            "nama": "Budi Santoso",
            "nik": "3201010101010001",
            "golongan": "IIIB",
            "statusKeluarga": "Nikah",
            "jumlahAnak": 2,
            "jabatan": "Lektor"
        })
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_computed_fields() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/employees", &create_valid_form()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let employee: Employee = serde_json::from_slice(&body).unwrap();
        assert!(employee.id.is_some());
        assert_eq!(employee.net_pay, 4_240_000);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_name_returns_validation_error() {
        let router = create_router(create_test_state());
        let mut form = create_valid_form();
        form["nama"] = serde_json::json!("");

        let response = router
            .oneshot(json_request("POST", "/employees", &form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/employees/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_without_records_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/export/csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOTHING_TO_EXPORT");
    }

    #[tokio::test]
    async fn test_rules_lists_form_options() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/rules").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let options: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(options["grades"], serde_json::json!(["IIIA", "IIIB", "IIIC", "IIID"]));
        assert_eq!(options["married_status"], "Nikah");
    }
}
