//! API Routes
//!
//! Configures the Axum router with all student endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_student_handler, delete_student_handler, deprecated_students_handler,
    get_student_handler, health_handler, list_students_handler, stats_handler,
    update_student_handler, v1_students_handler, v2_students_handler, webhook_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/:id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .route("/v1/students", get(v1_students_handler))
        .route("/v2/students", get(v2_students_handler))
        .route("/students-deprecated", get(deprecated_students_handler))
        .route("/webhook", post(webhook_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
