use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::teachers::entities::Teacher;

/// 教师列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
    pub pagination: PaginationInfo,
}
