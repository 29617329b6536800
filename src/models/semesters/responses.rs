use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::semesters::entities::Semester;

/// 学期列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterListResponse {
    pub items: Vec<Semester>,
    pub pagination: PaginationInfo,
}
