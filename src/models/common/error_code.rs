/// 业务错误码，随 ApiResponse 返回给调用方
///
/// 0 表示成功；1xxx 为通用错误；2xxx 按资源分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InvalidParams = 1001,
    NotFound = 1004,
    InternalServerError = 1500,

    // 院系
    DepartmentNotFound = 2101,
    DepartmentAlreadyExists = 2102,

    // 课程
    CourseNotFound = 2201,
    CourseAlreadyExists = 2202,

    // 学生
    StudentNotFound = 2301,
    StudentAlreadyExists = 2302,

    // 教师
    TeacherNotFound = 2401,
    TeacherAlreadyExists = 2402,

    // 学期
    SemesterNotFound = 2501,
    SemesterAlreadyExists = 2502,

    // 课程安排
    ScheduleNotFound = 2601,

    // 考勤
    AttendanceNotFound = 2701,

    // 通知
    NotificationNotFound = 2801,

    // 账号
    UserNotFound = 2901,
    UserAlreadyExists = 2902,
}
