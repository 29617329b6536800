use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};

/// 标记单条通知已读
pub async fn mark_as_read(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.mark_notification_as_read(notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("通知已标记为已读"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => {
            error!("Failed to mark notification as read: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("标记通知已读失败: {e}"),
                )),
            )
        }
    }
}

/// 标记用户全部通知已读，返回受影响条数
pub async fn mark_all_as_read(
    service: &NotificationService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.mark_all_notifications_as_read(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            count,
            "全部通知已标记为已读",
        ))),
        Err(e) => {
            error!("Failed to mark all notifications as read: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("标记全部通知已读失败: {e}"),
                )),
            )
        }
    }
}
