use sqlx::{Row, SqlitePool};

use student_core::{Email, Gender, NewStudent, Student, StudentId};

/// Persistence layer for student records, backed by SQLite.
#[derive(Clone)]
pub struct StudentStore {
    pool: SqlitePool,
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("{0} already linked to another student")]
    EmailTaken(Email),

    #[error("{0:?}")]
    Db(#[from] sqlx::Error),
}

impl StudentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(fields(email = ?student.email), skip_all)]
    pub async fn save(&self, student: NewStudent) -> Result<Student, SaveError> {
        let NewStudent {
            name,
            email,
            gender,
        } = student;

        let id: Result<i64, sqlx::Error> = sqlx::query_scalar(
            "INSERT INTO students (name, email, gender) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&name)
        .bind(&email)
        .bind(gender)
        .fetch_one(&self.pool)
        .await;

        match id {
            Ok(id) => Ok(Student {
                id: StudentId::from(id),
                name,
                email,
                gender,
            }),
            Err(err) if is_unique_violation(&err) => Err(SaveError::EmailTaken(email)),
            Err(err) => Err(SaveError::Db(err)),
        }
    }

    /// True iff at least one saved record's email equals `email` byte-for-byte.
    #[tracing::instrument(fields(?email), skip_all, ret)]
    pub async fn exists_by_email(&self, email: &Email) -> Result<bool, sqlx::Error> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE email = ? LIMIT 1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        match found {
            0 => Ok(false),
            _ => Ok(true),
        }
    }

    #[tracing::instrument(fields(?email), skip_all)]
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<Student>, sqlx::Error> {
        let row =
            sqlx::query("SELECT id, name, email, gender FROM students WHERE email = ? LIMIT 1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => Ok(Some(Student {
                id: StudentId::from(row.try_get::<i64, _>("id")?),
                name: row.try_get("name")?,
                email: Email::try_from_sqlx(row.try_get("email")?)?,
                gender: Gender::try_from_sqlx(row.try_get("gender")?)?,
            })),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn delete_all(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
