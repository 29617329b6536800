use super::SeaOrmStorage;
use crate::entity::semesters::{ActiveModel, Column, Entity as Semesters};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    semesters::{
        entities::Semester,
        requests::{CreateSemesterRequest, SemesterListParams},
        responses::SemesterListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学期
    pub async fn create_semester_impl(&self, req: CreateSemesterRequest) -> Result<Semester> {
        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            is_current: Set(req.is_current),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_semester())
    }

    /// 通过 ID 获取学期
    pub async fn get_semester_by_id_impl(&self, id: i64) -> Result<Option<Semester>> {
        let result = Semesters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_semester()))
    }

    /// 分页列出学期
    pub async fn list_semesters_with_pagination_impl(
        &self,
        query: SemesterListParams,
    ) -> Result<SemesterListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Semesters::find();

        // 当前学期筛选
        if let Some(is_current) = query.is_current {
            select = select.filter(Column::IsCurrent.eq(is_current));
        }

        // 排序
        select = select.order_by_desc(Column::StartDate);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学期总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学期页数失败: {e}")))?;

        let semesters = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(SemesterListResponse {
            items: semesters.into_iter().map(|m| m.into_semester()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
