//! 预导入模块，方便使用

pub use super::attendance_logs::{
    ActiveModel as AttendanceLogActiveModel, Entity as AttendanceLogs, Model as AttendanceLogModel,
};
pub use super::attendances::{
    ActiveModel as AttendanceActiveModel, Entity as Attendances, Model as AttendanceModel,
};
pub use super::class_schedules::{
    ActiveModel as ClassScheduleActiveModel, Entity as ClassSchedules, Model as ClassScheduleModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::semesters::{
    ActiveModel as SemesterActiveModel, Entity as Semesters, Model as SemesterModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
