use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::teachers::requests::TeacherListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list teachers: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师列表失败: {e}"),
                )),
            )
        }
    }
}
