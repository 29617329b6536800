//! 考勤记录实体
//!
//! (student_id, class_schedule_id, date) 上有唯一索引，
//! upsert 语义依赖该约束。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: i64,
    pub class_schedule_id: i64,
    pub date: Date,
    pub status: String,
    pub notes: Option<String>,
    pub marked_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::class_schedules::Entity",
        from = "Column::ClassScheduleId",
        to = "super::class_schedules::Column::Id"
    )]
    ClassSchedule,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::MarkedBy",
        to = "super::users::Column::Id"
    )]
    MarkedBy,
    #[sea_orm(has_many = "super::attendance_logs::Entity")]
    AttendanceLogs,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::class_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSchedule.def()
    }
}

impl Related<super::attendance_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance(self) -> crate::models::attendance::entities::Attendance {
        use crate::models::attendance::entities::{Attendance, AttendanceStatus};
        use chrono::{DateTime, Utc};

        Attendance {
            id: self.id,
            student_id: self.student_id,
            class_schedule_id: self.class_schedule_id,
            date: self.date,
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Present),
            notes: self.notes,
            marked_by: self.marked_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
