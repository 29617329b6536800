use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验院系存在
    match storage
        .get_department_by_id(teacher_data.department_id)
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

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created successfully", teacher.teacher_code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => Ok(handle_teacher_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_teacher_create_error(e: &str) -> HttpResponse {
    let msg = format!("Teacher creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeacherAlreadyExists,
            "Teacher code, username or email already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
