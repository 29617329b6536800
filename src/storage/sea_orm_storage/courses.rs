use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            department_id: Set(req.department_id),
            credits: Set(req.credits),
            description: Set(req.description),
            is_active: Set(true),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        // 启用状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 排序
        select = select.order_by_asc(Column::Code);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 统计启用课程数量
    pub async fn count_active_courses_impl(&self) -> Result<u64> {
        let count = Courses::find()
            .filter(Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count)
    }
}
