use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveDate;
use serde::Deserialize;

/// 创建学生请求
///
/// 同时创建关联账号，账号与学生一一对应。
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub student_code: String,
    pub department_id: i64,
    pub enrollment_date: NaiveDate,
    pub phone: Option<String>,
}

/// 更新学生请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub department_id: Option<i64>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

/// 学生列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
