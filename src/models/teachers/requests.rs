use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建教师请求
///
/// 同时创建关联账号，账号与教师一一对应。
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub teacher_code: String,
    pub department_id: i64,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub office_location: Option<String>,
}

/// 教师列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
