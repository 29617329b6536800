use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::ActiveModel as UserActiveModel;
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师及其关联账号
    ///
    /// 账号与教师一一对应，两条插入放在同一事务里。
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("开启事务失败: {e}")))?;

        let user = UserActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            display_name: Set(req.display_name),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AttendanceError::database_operation(format!("创建教师账号失败: {e}")))?;

        let teacher = ActiveModel {
            user_id: Set(user.id),
            teacher_code: Set(req.teacher_code),
            department_id: Set(req.department_id),
            phone: Set(req.phone),
            specialization: Set(req.specialization),
            office_location: Set(req.office_location),
            is_active: Set(true),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AttendanceError::database_operation(format!("创建教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(teacher.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 按工号搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::TeacherCode.contains(&escaped));
        }

        // 院系筛选
        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        // 在职状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 排序
        select = select.order_by_asc(Column::TeacherCode);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计在职教师数量
    pub async fn count_active_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .filter(Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }
}
