use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub credits: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
