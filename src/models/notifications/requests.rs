use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建通知请求
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
}

/// 通知列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}
