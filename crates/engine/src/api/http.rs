//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use departments_domain::{Department, DepartmentId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::{DepartmentError, RandomPickError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        // Static segment wins over `{id}` in axum's router.
        .route("/api/departments/random", get(random_department))
        .route(
            "/api/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Departments
// =============================================================================

#[derive(Debug, Deserialize)]
struct DepartmentBody {
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Acknowledged {
    message: &'static str,
    dep: Department,
}

impl Acknowledged {
    fn ok(dep: Department) -> Json<Self> {
        Json(Self { message: "OK", dep })
    }
}

async fn list_departments(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let departments = app.use_cases.departments.crud.list().await?;
    Ok(Json(departments))
}

async fn random_department(State(app): State<Arc<App>>) -> Result<Json<Department>, ApiError> {
    let department = app.use_cases.departments.random.execute().await?;
    Ok(Json(department))
}

async fn get_department(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Department>, ApiError> {
    let id = parse_id(&id)?;
    let department = app
        .use_cases
        .departments
        .crud
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("Not found"))?;
    Ok(Json(department))
}

async fn create_department(
    State(app): State<Arc<App>>,
    body: Result<Json<DepartmentBody>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApiError> {
    let Json(body) = body?;
    let department = app.use_cases.departments.crud.create(body.name).await?;
    Ok(Acknowledged::ok(department))
}

async fn update_department(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<DepartmentBody>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let department = app
        .use_cases
        .departments
        .crud
        .update(id, body.name)
        .await?;
    Ok(Acknowledged::ok(department))
}

async fn delete_department(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledged>, ApiError> {
    let id = parse_id(&id)?;
    let department = app.use_cases.departments.crud.delete(id).await?;
    Ok(Acknowledged::ok(department))
}

fn parse_id(raw: &str) -> Result<DepartmentId, ApiError> {
    raw.parse()
        .map_err(|e: departments_domain::DomainError| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<DepartmentError> for ApiError {
    fn from(e: DepartmentError) -> Self {
        match e {
            DepartmentError::NotFound { .. } => ApiError::NotFound("Not found..."),
            DepartmentError::InvalidInput(msg) => ApiError::BadRequest(msg),
            DepartmentError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<RandomPickError> for ApiError {
    fn from(e: RandomPickError) -> Self {
        match e {
            RandomPickError::NotFound => ApiError::NotFound("Not found"),
            RandomPickError::Unavailable(e) => ApiError::Internal(e.to_string()),
        }
    }
}
