use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_code: String,
    pub department_id: i64,
    pub enrollment_date: chrono::NaiveDate,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
