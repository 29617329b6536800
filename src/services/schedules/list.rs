use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScheduleService;
use crate::models::schedules::requests::ScheduleListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_schedules(
    service: &ScheduleService,
    request: &HttpRequest,
    query: ScheduleListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_class_schedules_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list class schedules: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程安排列表失败: {e}"),
                )),
            )
        }
    }
}
