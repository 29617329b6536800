use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::notifications::requests::{CreateNotificationRequest, NotificationListParams};
use crate::services::NotificationService;

// 懒加载的全局 NOTIFICATION_SERVICE 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

// HTTP处理程序
pub async fn create_notification(
    req: HttpRequest,
    notification_data: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .create_notification(&req, notification_data.into_inner())
        .await
}

pub async fn list_notifications(
    req: HttpRequest,
    user_id: web::Path<i64>,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_notifications(&req, user_id.into_inner(), query.into_inner())
        .await
}

pub async fn get_unread_count(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .get_unread_count(&req, user_id.into_inner())
        .await
}

pub async fn mark_as_read(
    req: HttpRequest,
    notification_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .mark_as_read(&req, notification_id.into_inner())
        .await
}

pub async fn mark_all_as_read(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .mark_all_as_read(&req, user_id.into_inner())
        .await
}

// 配置路由
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .service(web::resource("").route(web::post().to(create_notification)))
            .service(
                web::resource("/{notification_id}/read").route(web::put().to(mark_as_read)),
            ),
    );
    cfg.service(
        web::scope("/api/v1/users/{user_id}/notifications")
            .service(web::resource("").route(web::get().to(list_notifications)))
            .service(web::resource("/unread-count").route(web::get().to(get_unread_count)))
            .service(web::resource("/read-all").route(web::put().to(mark_all_as_read))),
    );
}
