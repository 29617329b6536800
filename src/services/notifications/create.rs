use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NotificationService;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_data: CreateNotificationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验收件账号存在
    match storage.get_user_by_id(notification_data.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            error!("Failed to get user by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching user",
                )),
            );
        }
    }

    match storage.create_notification(notification_data).await {
        Ok(notification) => {
            info!(
                "Notification {} created for user {}",
                notification.id, notification.user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                notification,
                "Notification created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Notification creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
