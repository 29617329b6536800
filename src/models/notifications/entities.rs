use serde::{Deserialize, Serialize};

// 通知实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
