//! 数据模型定义
//!
//! 业务实体与 HTTP 请求/响应结构，按资源划分子模块。

pub mod attendance;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod notifications;
pub mod reports;
pub mod schedules;
pub mod semesters;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，注入到 app_data 中
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
