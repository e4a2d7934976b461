//! SQLite implementation of `StudentStore` using sqlx.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tracing::info;

use crate::error::{Result, StudentError};
use crate::models::{NewStudent, Student, StudentUpdate};
use crate::store::StudentStore;

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        grade TEXT NOT NULL
    )
"#;

/// Student table backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStudentStore {
    pool: SqlitePool,
}

impl SqliteStudentStore {
    /// Opens (creating if missing) the database at `database_url` and makes
    /// sure the `students` table exists.
    ///
    /// # Configuration
    /// - Journal mode: WAL
    /// - Synchronous: NORMAL
    /// - Busy timeout: 5 seconds
    /// - Acquire timeout: 10 seconds
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StudentError::StoreUnavailable(format!("Invalid database URL: {}", e)))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        info!("Connected to student database at {}", database_url);
        Ok(store)
    }

    /// Private in-memory database. Pinned to one long-lived connection since
    /// every SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create_schema(&self) -> Result<()> {
        sqlx::query(CREATE_STUDENTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, grade FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }
}

#[async_trait]
impl StudentStore for SqliteStudentStore {
    async fn select_all(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, grade FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    async fn get_by_id(&self, id: i64) -> Result<Student> {
        self.find(id).await?.ok_or(StudentError::NotFound(id))
    }

    async fn insert(&self, student: NewStudent) -> Result<Student> {
        if let Some(id) = student.id {
            if self.find(id).await?.is_some() {
                return Err(StudentError::DuplicateIdentifier(id));
            }
        }

        let result = sqlx::query("INSERT INTO students (id, name, age, grade) VALUES (?, ?, ?, ?)")
            .bind(student.id)
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.grade)
            .execute(&self.pool)
            .await;

        let done = match result {
            Ok(done) => done,
            // Lost a race with another insert of the same id
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(StudentError::DuplicateIdentifier(student.id.unwrap_or_default()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Student {
            id: student.id.unwrap_or_else(|| done.last_insert_rowid()),
            name: student.name,
            age: student.age,
            grade: student.grade,
        })
    }

    async fn update(&self, id: i64, changes: StudentUpdate) -> Result<Student> {
        let done = sqlx::query("UPDATE students SET name = ?, age = ?, grade = ? WHERE id = ?")
            .bind(&changes.name)
            .bind(changes.age)
            .bind(&changes.grade)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(StudentError::NotFound(id));
        }

        Ok(Student {
            id,
            name: changes.name,
            age: changes.age,
            grade: changes.grade,
        })
    }

    async fn delete(&self, id: i64) -> Result<Student> {
        let existing = self.get_by_id(id).await?;

        let done = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(StudentError::NotFound(id));
        }
        Ok(existing)
    }
}
