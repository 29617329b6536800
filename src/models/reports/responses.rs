use serde::{Deserialize, Serialize};

/// 课程考勤报表中的单个学生行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReportRow {
    pub student_id: i64,
    pub student_code: String,
    pub name: String,
    pub total: i64,
    pub present: i64,
    pub present_percentage: f64,
}

/// 课程考勤报表响应
///
/// 按课程所属院系的在读学生逐人统计。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReportResponse {
    pub course_id: i64,
    pub course_name: String,
    pub course_code: String,
    pub rows: Vec<CourseReportRow>,
}
