use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveDate;
use serde::Deserialize;

/// 创建学期请求
#[derive(Debug, Deserialize)]
pub struct CreateSemesterRequest {
    pub name: String,
    pub code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_current: bool,
}

/// 学期列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct SemesterListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub is_current: Option<bool>,
}
