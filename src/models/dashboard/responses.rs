use serde::{Deserialize, Serialize};

/// 概览统计响应
///
/// attendance_rate 为当天考勤记录中 present 的占比（百分数，一位小数）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub total_students: i64,
    pub total_courses: i64,
    pub total_teachers: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub attendance_rate: f64,
}
