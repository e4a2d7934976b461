//! Domain records and the request/response bodies of the student API.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::{CreateStudentRequest, UpdateStudentRequest};
pub use responses::{
    DeleteResponse, DeprecationNotice, ErrorResponse, HealthResponse, StatsResponse,
    VersionResponse, WebhookAck,
};
pub use student::{Link, NewStudent, Student, StudentUpdate, StudentView};
