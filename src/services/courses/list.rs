use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::requests::CourseListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程列表失败: {e}"),
                )),
            )
        }
    }
}
