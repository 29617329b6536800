use serde::Deserialize;

/// 创建账号请求（由学生/教师创建流程内部使用）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}
