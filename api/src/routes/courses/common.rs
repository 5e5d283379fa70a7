use db::models::course::Model as CourseModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields required when creating a course. Scheduling details are optional
/// and fall back to the storage defaults.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Course number is required"))]
    pub course_number: String,

    pub credit_hours: i32,
    pub semester_id: i64,

    pub monday: Option<bool>,
    pub tuesday: Option<bool>,
    pub wednesday: Option<bool>,
    pub thursday: Option<bool>,
    pub friday: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub enrollment_open: Option<bool>,
    pub asynchronous: Option<bool>,
}

/// Statically typed partial-update record: every mutable course field is
/// explicitly optional, so a key that is present in the request (including
/// an explicit `false` for the booleans) is distinguishable from one that
/// was omitted.
#[derive(Debug, Default, Deserialize)]
pub struct CourseFieldPatch {
    pub name: Option<String>,
    pub course_number: Option<String>,
    pub credit_hours: Option<i32>,
    pub semester_id: Option<i64>,
    pub monday: Option<bool>,
    pub tuesday: Option<bool>,
    pub wednesday: Option<bool>,
    pub thursday: Option<bool>,
    pub friday: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub enrollment_open: Option<bool>,
    pub asynchronous: Option<bool>,
}

/// The 16 mutable course fields with every value resolved against a source
/// record: supplied patch fields win, everything else keeps the stored value.
#[derive(Debug, PartialEq)]
pub struct ResolvedCourseFields {
    pub name: String,
    pub course_number: String,
    pub credit_hours: i32,
    pub semester_id: i64,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: i32,
    pub enrollment_open: bool,
    pub asynchronous: bool,
}

impl CourseFieldPatch {
    /// Folds the patch over an existing course. A `null` value in the JSON
    /// deserializes to `None` and is treated the same as an absent key.
    pub fn resolve(self, source: &CourseModel) -> ResolvedCourseFields {
        ResolvedCourseFields {
            name: self.name.unwrap_or_else(|| source.name.clone()),
            course_number: self
                .course_number
                .unwrap_or_else(|| source.course_number.clone()),
            credit_hours: self.credit_hours.unwrap_or(source.credit_hours),
            semester_id: self.semester_id.unwrap_or(source.semester_id),
            monday: self.monday.unwrap_or(source.monday),
            tuesday: self.tuesday.unwrap_or(source.tuesday),
            wednesday: self.wednesday.unwrap_or(source.wednesday),
            thursday: self.thursday.unwrap_or(source.thursday),
            friday: self.friday.unwrap_or(source.friday),
            start_time: self.start_time.or_else(|| source.start_time.clone()),
            end_time: self.end_time.or_else(|| source.end_time.clone()),
            subject: self.subject.or_else(|| source.subject.clone()),
            location: self.location.or_else(|| source.location.clone()),
            description: self.description.or_else(|| source.description.clone()),
            capacity: self.capacity.unwrap_or(source.capacity),
            enrollment_open: self.enrollment_open.unwrap_or(source.enrollment_open),
            asynchronous: self.asynchronous.unwrap_or(source.asynchronous),
        }
    }
}

/// Source id plus override fields for `POST /course/duplicate`. The
/// override fields share the partial-update presence semantics.
#[derive(Debug, Deserialize)]
pub struct DuplicateCourseRequest {
    pub id: i64,
    #[serde(flatten)]
    pub fields: CourseFieldPatch,
}

#[derive(Debug, Serialize)]
pub struct DuplicateCourseResponse {
    pub duplicate_course: CourseResponse,
    pub course: CourseResponse,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub course_number: String,
    pub credit_hours: i32,
    pub semester_id: i64,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: i32,
    pub enrollment_open: bool,
    pub asynchronous: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseModel> for CourseResponse {
    fn from(course: CourseModel) -> Self {
        Self {
            id: course.id,
            name: course.name,
            course_number: course.course_number,
            credit_hours: course.credit_hours,
            semester_id: course.semester_id,
            monday: course.monday,
            tuesday: course.tuesday,
            wednesday: course.wednesday,
            thursday: course.thursday,
            friday: course.friday,
            start_time: course.start_time,
            end_time: course.end_time,
            subject: course.subject,
            location: course.location,
            description: course.description,
            capacity: course.capacity,
            enrollment_open: course.enrollment_open,
            asynchronous: course.asynchronous,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}
