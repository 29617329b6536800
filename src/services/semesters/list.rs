use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SemesterService;
use crate::models::semesters::requests::SemesterListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_semesters(
    service: &SemesterService,
    request: &HttpRequest,
    query: SemesterListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_semesters_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list semesters: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学期列表失败: {e}"),
                )),
            )
        }
    }
}
