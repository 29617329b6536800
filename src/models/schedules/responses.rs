use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;
use crate::models::schedules::entities::ClassSchedule;

/// 课程安排列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    pub items: Vec<ClassSchedule>,
    pub pagination: PaginationInfo,
}
