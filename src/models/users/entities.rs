use serde::{Deserialize, Serialize};

// 账号实体
//
// 学生与教师各自关联一个账号；认证不在本系统范围内，
// 账号仅承载身份与联系信息。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
