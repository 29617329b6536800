//! 学期实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "semesters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_schedules::Entity")]
    ClassSchedules,
}

impl Related<super::class_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSchedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_semester(self) -> crate::models::semesters::entities::Semester {
        use crate::models::semesters::entities::Semester;

        Semester {
            id: self.id,
            name: self.name,
            code: self.code,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
        }
    }
}
