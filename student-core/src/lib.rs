mod email;
mod gender;
mod student;

pub use email::Email;
pub use gender::Gender;
pub use student::{NewStudent, Student, StudentId};
