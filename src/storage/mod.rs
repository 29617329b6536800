use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    attendance::{
        entities::{Attendance, AttendanceLog},
        requests::{AttendanceListQuery, MarkAttendanceRequest},
        responses::AttendanceListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams},
        responses::DepartmentListResponse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListParams},
        responses::NotificationListResponse,
    },
    schedules::{
        entities::ClassSchedule,
        requests::{CreateScheduleRequest, ScheduleListParams},
        responses::ScheduleListResponse,
    },
    semesters::{
        entities::Semester,
        requests::{CreateSemesterRequest, SemesterListParams},
        responses::SemesterListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams},
        responses::TeacherListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取账号信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 院系管理方法
    // 创建院系
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    // 通过ID获取院系信息
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 列出院系
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 统计启用课程数量
    async fn count_active_courses(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生（连同关联账号）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 列出某院系的学生及其账号（点名册、报表用）
    async fn list_students_by_department(
        &self,
        department_id: i64,
        active_only: bool,
    ) -> Result<Vec<(Student, User)>>;
    // 统计在读学生数量
    async fn count_active_students(&self) -> Result<u64>;

    /// 教师管理方法
    // 创建教师（连同关联账号）
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse>;
    // 统计在职教师数量
    async fn count_active_teachers(&self) -> Result<u64>;

    /// 学期管理方法
    // 创建学期
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester>;
    // 通过ID获取学期信息
    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>>;
    // 列出学期
    async fn list_semesters_with_pagination(
        &self,
        query: SemesterListParams,
    ) -> Result<SemesterListResponse>;

    /// 课程安排管理方法
    // 创建课程安排
    async fn create_class_schedule(
        &self,
        schedule: CreateScheduleRequest,
    ) -> Result<ClassSchedule>;
    // 通过ID获取课程安排信息
    async fn get_class_schedule_by_id(&self, id: i64) -> Result<Option<ClassSchedule>>;
    // 列出课程安排
    async fn list_class_schedules_with_pagination(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse>;

    /// 考勤管理方法
    // 登记考勤：按 (student_id, class_schedule_id, date) upsert，
    // 返回记录与是否新建；同时追加一条变更日志
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<(Attendance, bool)>;
    // 按唯一键获取考勤记录
    async fn get_attendance_by_key(
        &self,
        student_id: i64,
        class_schedule_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Attendance>>;
    // 列出考勤记录（可按学生/课程安排/课程/状态/日期范围过滤）
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 列出某学生的全部考勤记录
    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>>;
    // 列出某学生在某课程下的考勤记录
    async fn list_attendance_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Vec<Attendance>>;
    // 列出某天的全部考勤记录
    async fn list_attendance_by_date(&self, date: NaiveDate) -> Result<Vec<Attendance>>;
    // 列出某条考勤记录的变更日志
    async fn list_attendance_logs(&self, attendance_id: Uuid) -> Result<Vec<AttendanceLog>>;

    /// 通知管理方法
    // 创建通知
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    // 列出用户通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListParams,
    ) -> Result<NotificationListResponse>;
    // 获取用户未读通知数量
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64>;
    // 标记通知为已读
    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<bool>;
    // 标记用户所有通知为已读
    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
