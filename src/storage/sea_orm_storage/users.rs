use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Entity as Users};
use crate::errors::{AttendanceError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            display_name: Set(req.display_name),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建账号失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取账号
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }
}
