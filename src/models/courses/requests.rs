use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub credits: i32,
    pub description: Option<String>,
}

/// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// 课程列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
