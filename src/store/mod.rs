//! Persistent store for student records.
//!
//! The service only talks to the `StudentStore` trait; `SqliteStudentStore`
//! is the production implementation.

mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewStudent, Student, StudentUpdate};

pub use sqlite::SqliteStudentStore;

/// Repository interface for student persistence.
///
/// Connectivity problems surface as `StudentError::StoreUnavailable`.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records in ascending id order.
    async fn select_all(&self) -> Result<Vec<Student>>;

    /// Fails with `NotFound` when absent.
    async fn get_by_id(&self, id: i64) -> Result<Student>;

    /// Stores a new record and returns it with its assigned id. Fails with
    /// `DuplicateIdentifier` when the supplied id is taken.
    async fn insert(&self, student: NewStudent) -> Result<Student>;

    /// Replaces name, age and grade. Fails with `NotFound` when absent.
    async fn update(&self, id: i64, changes: StudentUpdate) -> Result<Student>;

    /// Removes a record and returns what was removed.
    async fn delete(&self, id: i64) -> Result<Student>;
}
