use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub teacher_code: String,
    pub department_id: i64,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub office_location: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
