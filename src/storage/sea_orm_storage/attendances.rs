//! 考勤存储操作
//!
//! upsert 依赖 (student_id, class_schedule_id, date) 的唯一索引：
//! 插入语句自带 ON CONFLICT DO UPDATE，并发竞争的一方退化为更新，
//! 不会向调用方暴露唯一约束错误。

use super::SeaOrmStorage;
use crate::entity::attendance_logs::{
    ActiveModel as LogActiveModel, Column as LogColumn, Entity as AttendanceLogs,
};
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances, Relation};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{Attendance, AttendanceLog, AttendanceStatus, LogAction},
        requests::{AttendanceListQuery, MarkAttendanceRequest},
        responses::AttendanceListResponse,
    },
};
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

impl SeaOrmStorage {
    /// 登记考勤（upsert）
    ///
    /// 返回写入后的记录与 created 标志。created 由插入前的查找决定：
    /// 并发竞争下输掉的一方会把已有记录当作覆盖处理，数据仍然正确，
    /// 只是两边都可能报告 created=true。
    pub async fn mark_attendance_impl(
        &self,
        req: MarkAttendanceRequest,
    ) -> Result<(Attendance, bool)> {
        let now = chrono::Utc::now().timestamp();

        // 先查找既有记录，决定 created 标志与日志内容
        let existing = Attendances::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::ClassScheduleId.eq(req.class_schedule_id))
            .filter(Column::Date.eq(req.date))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let created = existing.is_none();
        let old_status = existing
            .as_ref()
            .and_then(|m| m.status.parse::<AttendanceStatus>().ok());

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(req.student_id),
            class_schedule_id: Set(req.class_schedule_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            notes: Set(req.notes.clone()),
            marked_by: Set(req.marked_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // 冲突时保留原 id 和 created_at，仅覆盖状态相关列
        Attendances::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::ClassScheduleId, Column::Date])
                    .update_columns([
                        Column::Status,
                        Column::Notes,
                        Column::MarkedBy,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("登记考勤失败: {e}")))?;

        let stored = Attendances::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::ClassScheduleId.eq(req.class_schedule_id))
            .filter(Column::Date.eq(req.date))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?
            .ok_or_else(|| AttendanceError::database_operation("考勤记录写入后不可见"))?;

        // 追加变更日志
        let action = if created {
            LogAction::Create
        } else {
            LogAction::Update
        };
        let log = LogActiveModel {
            attendance_id: Set(stored.id),
            action: Set(action.to_string()),
            old_status: Set(old_status.map(|s| s.to_string())),
            new_status: Set(req.status.to_string()),
            changed_by: Set(req.marked_by),
            created_at: Set(now),
            ..Default::default()
        };

        log.insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("写入考勤日志失败: {e}")))?;

        Ok((stored.into_attendance(), created))
    }

    /// 按唯一键获取考勤记录
    pub async fn get_attendance_by_key_impl(
        &self,
        student_id: i64,
        class_schedule_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Attendance>> {
        let result = Attendances::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ClassScheduleId.eq(class_schedule_id))
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 分页列出考勤记录
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Attendances::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(schedule_id) = query.class_schedule_id {
            select = select.filter(Column::ClassScheduleId.eq(schedule_id));
        }

        // 课程过滤需要经课程安排关联
        if let Some(course_id) = query.course_id {
            select = select
                .join(JoinType::InnerJoin, Relation::ClassSchedule.def())
                .filter(crate::entity::class_schedules::Column::CourseId.eq(course_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 日期范围过滤；完全未给定时回看 30 天
        if query.date_from.is_none() && query.date_to.is_none() {
            let thirty_days_ago = chrono::Utc::now().date_naive() - chrono::Duration::days(30);
            select = select.filter(Column::Date.gte(thirty_days_ago));
        } else {
            if let Some(from) = query.date_from {
                select = select.filter(Column::Date.gte(from));
            }
            if let Some(to) = query.date_to {
                select = select.filter(Column::Date.lte(to));
            }
        }

        // 排序
        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::UpdatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let attendances = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(AttendanceListResponse {
            items: attendances
                .into_iter()
                .map(|m| m.into_attendance())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出某学生的全部考勤记录
    pub async fn list_attendance_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Attendance>> {
        let results = Attendances::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询学生考勤记录失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 列出某学生在某课程下的考勤记录
    pub async fn list_attendance_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Vec<Attendance>> {
        let results = Attendances::find()
            .filter(Column::StudentId.eq(student_id))
            .join(JoinType::InnerJoin, Relation::ClassSchedule.def())
            .filter(crate::entity::class_schedules::Column::CourseId.eq(course_id))
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询课程考勤记录失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 列出某天的全部考勤记录
    pub async fn list_attendance_by_date_impl(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        let results = Attendances::find()
            .filter(Column::Date.eq(date))
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询当日考勤记录失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 列出某条考勤记录的变更日志
    pub async fn list_attendance_logs_impl(
        &self,
        attendance_id: Uuid,
    ) -> Result<Vec<AttendanceLog>> {
        let results = AttendanceLogs::find()
            .filter(LogColumn::AttendanceId.eq(attendance_id))
            .order_by_desc(LogColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤日志失败: {e}")))?;

        Ok(results
            .into_iter()
            .map(|m| m.into_attendance_log())
            .collect())
    }
}
