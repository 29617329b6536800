use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated successfully", course.code);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to update course: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新课程失败: {e}"),
                )),
            )
        }
    }
}
