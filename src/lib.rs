//! Student Registry - CRUD service for student records
//!
//! The student listing is served through an in-memory read-through cache
//! with a fixed TTL that every write invalidates.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::StudentError;
pub use service::StudentService;
