use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::departments::entities::Department;

/// 院系列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentListResponse {
    pub items: Vec<Department>,
    pub pagination: PaginationInfo,
}
