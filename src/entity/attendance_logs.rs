//! 考勤变更日志实体（仅追加）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub attendance_id: Uuid,
    pub action: String,
    pub old_status: Option<String>,
    pub new_status: String,
    pub changed_by: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendances::Entity",
        from = "Column::AttendanceId",
        to = "super::attendances::Column::Id"
    )]
    Attendance,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ChangedBy",
        to = "super::users::Column::Id"
    )]
    ChangedBy,
}

impl Related<super::attendances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance_log(self) -> crate::models::attendance::entities::AttendanceLog {
        use crate::models::attendance::entities::{AttendanceLog, AttendanceStatus, LogAction};
        use chrono::{DateTime, Utc};

        AttendanceLog {
            id: self.id,
            attendance_id: self.attendance_id,
            action: self.action.parse::<LogAction>().unwrap_or(LogAction::Create),
            old_status: self
                .old_status
                .and_then(|s| s.parse::<AttendanceStatus>().ok()),
            new_status: self
                .new_status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Present),
            changed_by: self.changed_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
