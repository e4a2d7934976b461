//! API Module
//!
//! HTTP handlers and routing for the student REST API.
//!
//! # Endpoints
//! - `GET /students` - List students (cached)
//! - `POST /students` - Create a student
//! - `GET /students/:id` - Fetch one student
//! - `PUT /students/:id` - Replace a student's fields
//! - `DELETE /students/:id` - Delete a student
//! - `GET /v1/students`, `GET /v2/students` - Version descriptors
//! - `GET /students-deprecated` - Deprecation notice
//! - `POST /webhook` - Echo a JSON payload
//! - `GET /stats` - Listing cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
