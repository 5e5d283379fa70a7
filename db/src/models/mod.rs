pub mod course;
pub mod course_user;
pub mod user;
