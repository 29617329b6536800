use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验院系存在
    match storage.get_department_by_id(course_data.department_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DepartmentNotFound,
                "Department not found",
            )));
        }
        Err(e) => {
            error!("Failed to get department by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching department",
                )),
            );
        }
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created successfully", course.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => Ok(handle_course_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_course_create_error(e: &str) -> HttpResponse {
    let msg = format!("Course creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseAlreadyExists,
            "Course code already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
