use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::students::entities::Student;

/// 学生列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}
