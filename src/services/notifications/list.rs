use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NotificationService;
use crate::models::notifications::requests::NotificationListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    user_id: i64,
    query: NotificationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_notifications_with_pagination(user_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list notifications: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询通知列表失败: {e}"),
                )),
            )
        }
    }
}
