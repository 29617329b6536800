use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::courses::entities::Course;

/// 课程列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}
