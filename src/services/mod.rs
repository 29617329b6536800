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

pub use attendance::AttendanceService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use departments::DepartmentService;
pub use notifications::NotificationService;
pub use reports::ReportService;
pub use schedules::ScheduleService;
pub use semesters::SemesterService;
pub use students::StudentService;
pub use teachers::TeacherService;
