pub mod attendance;

pub mod courses;

pub mod dashboard;

pub mod departments;

pub mod notifications;

pub mod reports;

pub mod schedules;

pub mod semesters;

pub mod students;

pub mod teachers;

pub use attendance::configure_attendance_routes;
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use departments::configure_department_routes;
pub use notifications::configure_notification_routes;
pub use reports::configure_report_routes;
pub use schedules::configure_schedule_routes;
pub use semesters::configure_semester_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
