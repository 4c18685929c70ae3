use sqlx::{Sqlite, Type};

use crate::{Email, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(i64);

/// A student record as persisted, id assigned by the store.
#[derive(Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: Email,
    pub gender: Gender,
}

/// A student record that has not been saved yet.
#[derive(Debug)]
pub struct NewStudent {
    pub name: String,
    pub email: Email,
    pub gender: Gender,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: Email, gender: Gender) -> Self {
        Self {
            name: name.into(),
            email,
            gender,
        }
    }
}

impl Type<Sqlite> for StudentId {
    fn type_info() -> <Sqlite as sqlx::Database>::TypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }
}

impl sqlx::Encode<'_, Sqlite> for StudentId {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as sqlx::Database>::ArgumentBuffer<'_>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        StudentId(value)
    }
}
