use serde::{Deserialize, Serialize};

// 学期实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub is_current: bool,
}
