//! API Handlers
//!
//! HTTP request handlers for each student endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::HeaderName, HeaderValue, StatusCode},
    Json,
};
use tracing::info;

use crate::error::{Result, StudentError};
use crate::models::{
    CreateStudentRequest, DeleteResponse, DeprecationNotice, HealthResponse, StatsResponse,
    Student, StudentView, UpdateStudentRequest, VersionResponse, WebhookAck,
};
use crate::service::StudentService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<StudentService>,
}

impl AppState {
    pub fn new(service: StudentService) -> Self {
        Self {
            students: Arc::new(service),
        }
    }
}

/// Handler for GET /students
///
/// Served through the listing cache.
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentView>>> {
    info!("Fetching students list");
    let listing = state.students.list_students().await?;
    Ok(Json(listing))
}

/// Handler for POST /students
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>)> {
    if let Some(error_msg) = req.validate() {
        return Err(StudentError::InvalidRequest(error_msg));
    }

    let student = state.students.create_student(req.into()).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for GET /students/:id
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>> {
    let student = state.students.get_student(id).await?;
    Ok(Json(student))
}

/// Handler for PUT /students/:id
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<Student>> {
    if let Some(error_msg) = req.validate() {
        return Err(StudentError::InvalidRequest(error_msg));
    }

    let student = state.students.update_student(id, req.into()).await?;
    Ok(Json(student))
}

/// Handler for DELETE /students/:id
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let removed = state.students.delete_student(id).await?;
    Ok(Json(DeleteResponse::new(removed.id)))
}

/// Handler for GET /v1/students
pub async fn v1_students_handler() -> Json<VersionResponse> {
    Json(VersionResponse::v1())
}

/// Handler for GET /v2/students
pub async fn v2_students_handler() -> Json<VersionResponse> {
    Json(VersionResponse::v2())
}

/// Handler for GET /students-deprecated
pub async fn deprecated_students_handler(
) -> ([(HeaderName, HeaderValue); 1], Json<DeprecationNotice>) {
    (
        [(
            HeaderName::from_static("deprecation"),
            HeaderValue::from_static("true"),
        )],
        Json(DeprecationNotice::students()),
    )
}

/// Handler for POST /webhook
///
/// Accepts any JSON payload and echoes it back.
pub async fn webhook_handler(Json(data): Json<serde_json::Value>) -> Json<WebhookAck> {
    info!("Webhook received: {}", data);
    Json(WebhookAck::received(data))
}

/// Handler for GET /stats
///
/// Returns listing cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.students.cache_stats().await;
    let (ttl_seconds, capacity) = state.students.cache_settings().await;
    Json(StatsResponse::new(stats, ttl_seconds, capacity))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
