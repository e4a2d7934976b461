//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::{NewStudent, StudentUpdate};

/// Request body for POST /students
///
/// `id` is optional; when present it must not already exist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub grade: String,
}

impl CreateStudentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(id) = self.id {
            if id <= 0 {
                return Some("Student id must be positive".to_string());
            }
        }
        validate_fields(&self.name, self.age, &self.grade)
    }
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            age: req.age,
            grade: req.grade,
        }
    }
}

/// Request body for PUT /students/:id
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub age: i32,
    pub grade: String,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Option<String> {
        validate_fields(&self.name, self.age, &self.grade)
    }
}

impl From<UpdateStudentRequest> for StudentUpdate {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            grade: req.grade,
        }
    }
}

fn validate_fields(name: &str, age: i32, grade: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name cannot be empty".to_string());
    }
    if age < 0 {
        return Some("Age cannot be negative".to_string());
    }
    if grade.trim().is_empty() {
        return Some("Grade cannot be empty".to_string());
    }
    None
}
