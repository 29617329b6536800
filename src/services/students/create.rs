use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验院系存在
    match storage
        .get_department_by_id(student_data.department_id)
        .await
    {
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

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created successfully", student.student_code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(handle_student_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_student_create_error(e: &str) -> HttpResponse {
    let msg = format!("Student creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Student code, username or email already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
