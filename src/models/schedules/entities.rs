use serde::{Deserialize, Serialize};

// 课程安排实体
//
// 一条记录代表某课程在某学期内每周固定时段的一次教学安排。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSchedule {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub semester_id: i64,
    /// 1=周一 .. 7=周日
    pub day_of_week: i32,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub room: Option<String>,
    pub is_active: bool,
}
