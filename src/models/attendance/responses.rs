use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PaginationInfo;
use crate::models::attendance::entities::{Attendance, AttendanceStatus};

/// 单条考勤登记结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub attendance: Attendance,
    /// true 表示新建，false 表示覆盖已有记录
    pub created: bool,
}

/// 批量考勤中单个学生的处理结果，按输入顺序返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAttendanceResult {
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 批量考勤登记结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAttendanceResponse {
    pub created: i64,
    pub updated: i64,
    pub failed: i64,
    pub results: Vec<BulkAttendanceResult>,
}

/// 考勤列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceListResponse {
    pub items: Vec<Attendance>,
    pub pagination: PaginationInfo,
}

/// 考勤统计汇总
///
/// 对一组已过滤的考勤记录做纯聚合，出勤率保留一位小数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    pub present_percentage: f64,
}

/// 点名册中的学生条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStudent {
    pub student_id: i64,
    pub student_code: String,
    pub name: String,
    pub email: String,
    /// 当天已有的考勤状态，未登记为 None
    pub existing_status: Option<AttendanceStatus>,
}

/// 点名册的课程安排信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterClassInfo {
    pub class_schedule_id: i64,
    pub course_name: String,
    pub course_code: String,
    pub day_of_week: i32,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub room: Option<String>,
}

/// 点名册响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub class_info: RosterClassInfo,
    pub date: chrono::NaiveDate,
    pub students: Vec<RosterStudent>,
}
