//! Student records and the listing projection served to clients.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row as held by the persistent store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Fields for a new record. `id` is assigned by the store when omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Full replacement of a record's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Hyperlink descriptor attached to each listed student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// One element of the `GET /students` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentView {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub grade: String,
    pub links: Vec<Link>,
}

impl From<Student> for StudentView {
    fn from(student: Student) -> Self {
        let href = format!("/students/{}", student.id);
        let links = ["self", "update", "delete"]
            .into_iter()
            .map(|rel| Link::new(rel, href.clone()))
            .collect();

        Self {
            id: student.id,
            name: student.name,
            age: student.age,
            grade: student.grade,
            links,
        }
    }
}
