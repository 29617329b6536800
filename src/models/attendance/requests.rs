use crate::models::attendance::entities::AttendanceStatus;
use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveDate;
use serde::Deserialize;

/// 单条考勤登记请求
///
/// (student_id, class_schedule_id, date) 命中已有记录时覆盖其状态，
/// 否则创建新记录。
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    pub class_schedule_id: i64,
    pub date: NaiveDate, // ISO 8601 格式，如 "2025-06-02"
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    /// 登记人账号，缺省或账号不存在时记录为空
    pub marked_by: Option<i64>,
}

/// 批量考勤中的单个学生条目
#[derive(Debug, Clone, Deserialize)]
pub struct BulkAttendanceItem {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// 批量考勤登记请求
#[derive(Debug, Clone, Deserialize)]
pub struct BulkAttendanceRequest {
    pub class_schedule_id: i64,
    pub date: NaiveDate,
    pub marked_by: Option<i64>,
    pub records: Vec<BulkAttendanceItem>,
}

/// 考勤列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub class_schedule_id: Option<i64>,
    /// 按课程过滤（经课程安排关联）
    pub course_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub class_schedule_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// 点名册查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct RosterParams {
    /// 缺省为当天
    pub date: Option<NaiveDate>,
}
