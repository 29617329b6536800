use super::SeaOrmStorage;
use crate::entity::class_schedules::{ActiveModel, Column, Entity as ClassSchedules};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    schedules::{
        entities::ClassSchedule,
        requests::{CreateScheduleRequest, ScheduleListParams},
        responses::ScheduleListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程安排
    pub async fn create_class_schedule_impl(
        &self,
        req: CreateScheduleRequest,
    ) -> Result<ClassSchedule> {
        let model = ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(req.teacher_id),
            semester_id: Set(req.semester_id),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            room: Set(req.room),
            is_active: Set(true),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建课程安排失败: {e}")))?;

        Ok(result.into_class_schedule())
    }

    /// 通过 ID 获取课程安排
    pub async fn get_class_schedule_by_id_impl(&self, id: i64) -> Result<Option<ClassSchedule>> {
        let result = ClassSchedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程安排失败: {e}")))?;

        Ok(result.map(|m| m.into_class_schedule()))
    }

    /// 分页列出课程安排
    pub async fn list_class_schedules_with_pagination_impl(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = ClassSchedules::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(semester_id) = query.semester_id {
            select = select.filter(Column::SemesterId.eq(semester_id));
        }

        if let Some(day_of_week) = query.day_of_week {
            select = select.filter(Column::DayOfWeek.eq(day_of_week));
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 按星期和开始时间排序
        select = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            AttendanceError::database_operation(format!("查询课程安排总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            AttendanceError::database_operation(format!("查询课程安排页数失败: {e}"))
        })?;

        let schedules = paginator.fetch_page(page - 1).await.map_err(|e| {
            AttendanceError::database_operation(format!("查询课程安排列表失败: {e}"))
        })?;

        Ok(ScheduleListResponse {
            items: schedules
                .into_iter()
                .map(|m| m.into_class_schedule())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
