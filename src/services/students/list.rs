use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::StudentListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生列表失败: {e}"),
                )),
            )
        }
    }
}
