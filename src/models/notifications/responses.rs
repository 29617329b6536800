use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::notifications::entities::Notification;

/// 通知列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// 未读数量响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}
