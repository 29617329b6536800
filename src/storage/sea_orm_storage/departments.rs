use super::SeaOrmStorage;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams},
        responses::DepartmentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(
        &self,
        req: CreateDepartmentRequest,
    ) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建院系失败: {e}")))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出院系
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Departments::find();

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

        // 排序
        select = select.order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系页数失败: {e}")))?;

        let departments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(DepartmentListResponse {
            items: departments
                .into_iter()
                .map(|m| m.into_department())
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
