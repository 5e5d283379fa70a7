pub mod m202608200001_create_users;
pub mod m202608200002_create_courses;
pub mod m202608200003_create_course_users;
