use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建院系请求
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

/// 院系列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}
