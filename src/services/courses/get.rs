use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(course, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            )
        }
    }
}
