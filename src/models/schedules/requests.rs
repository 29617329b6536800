use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveTime;
use serde::Deserialize;

/// 创建课程安排请求
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub course_id: i64,
    pub teacher_id: i64,
    pub semester_id: i64,
    /// 1=周一 .. 7=周日
    pub day_of_week: i32,
    pub start_time: NaiveTime, // "09:00:00"
    pub end_time: NaiveTime,
    pub room: Option<String>,
}

/// 课程安排列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub semester_id: Option<i64>,
    pub day_of_week: Option<i32>,
    pub is_active: Option<bool>,
}
