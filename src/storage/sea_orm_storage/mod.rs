//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendances;
mod class_schedules;
mod courses;
mod departments;
mod notifications;
mod semesters;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{AttendanceError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（使用全局配置）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接指定数据库并运行迁移
    ///
    /// 集成测试通过这个入口使用内存 SQLite。
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 获取底层连接（直接的实体操作和测试用）
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AttendanceError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AttendanceError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    // 院系模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn count_active_courses(&self) -> Result<u64> {
        self.count_active_courses_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn list_students_by_department(
        &self,
        department_id: i64,
        active_only: bool,
    ) -> Result<Vec<(Student, User)>> {
        self.list_students_by_department_impl(department_id, active_only)
            .await
    }

    async fn count_active_students(&self) -> Result<u64> {
        self.count_active_students_impl().await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn count_active_teachers(&self) -> Result<u64> {
        self.count_active_teachers_impl().await
    }

    // 学期模块
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester> {
        self.create_semester_impl(semester).await
    }

    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>> {
        self.get_semester_by_id_impl(id).await
    }

    async fn list_semesters_with_pagination(
        &self,
        query: SemesterListParams,
    ) -> Result<SemesterListResponse> {
        self.list_semesters_with_pagination_impl(query).await
    }

    // 课程安排模块
    async fn create_class_schedule(
        &self,
        schedule: CreateScheduleRequest,
    ) -> Result<ClassSchedule> {
        self.create_class_schedule_impl(schedule).await
    }

    async fn get_class_schedule_by_id(&self, id: i64) -> Result<Option<ClassSchedule>> {
        self.get_class_schedule_by_id_impl(id).await
    }

    async fn list_class_schedules_with_pagination(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse> {
        self.list_class_schedules_with_pagination_impl(query).await
    }

    // 考勤模块
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<(Attendance, bool)> {
        self.mark_attendance_impl(req).await
    }

    async fn get_attendance_by_key(
        &self,
        student_id: i64,
        class_schedule_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Attendance>> {
        self.get_attendance_by_key_impl(student_id, class_schedule_id, date)
            .await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendance_by_student_impl(student_id).await
    }

    async fn list_attendance_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_by_student_and_course_impl(student_id, course_id)
            .await
    }

    async fn list_attendance_by_date(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        self.list_attendance_by_date_impl(date).await
    }

    async fn list_attendance_logs(&self, attendance_id: Uuid) -> Result<Vec<AttendanceLog>> {
        self.list_attendance_logs_impl(attendance_id).await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListParams,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<bool> {
        self.mark_notification_as_read_impl(notification_id).await
    }

    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64> {
        self.mark_all_notifications_as_read_impl(user_id).await
    }
}
