use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{AttendanceError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::entities::User,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生及其关联账号
    ///
    /// 账号与学生一一对应，两条插入放在同一事务里。
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
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
        .map_err(|e| AttendanceError::database_operation(format!("创建学生账号失败: {e}")))?;

        let student = ActiveModel {
            user_id: Set(user.id),
            student_code: Set(req.student_code),
            department_id: Set(req.department_id),
            enrollment_date: Set(req.enrollment_date),
            phone: Set(req.phone),
            is_active: Set(true),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AttendanceError::database_operation(format!("创建学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(student.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Students::find();

        // 按学号搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::StudentCode.contains(&escaped));
        }

        // 院系筛选
        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        // 在读状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 排序
        select = select.order_by_asc(Column::StudentCode);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 列出某院系的学生及其账号
    pub async fn list_students_by_department_impl(
        &self,
        department_id: i64,
        active_only: bool,
    ) -> Result<Vec<(Student, User)>> {
        let mut select = Students::find().filter(Column::DepartmentId.eq(department_id));

        if active_only {
            select = select.filter(Column::IsActive.eq(true));
        }

        let results = select
            .find_also_related(Users)
            .order_by_asc(Column::StudentCode)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询院系学生失败: {e}")))?;

        Ok(results
            .into_iter()
            .filter_map(|(student, user)| {
                user.map(|u| (student.into_student(), u.into_user()))
            })
            .collect())
    }

    /// 统计在读学生数量
    pub async fn count_active_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .filter(Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }
}
