use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 指定了新院系时先校验存在
    if let Some(department_id) = update_data.department_id {
        match storage.get_department_by_id(department_id).await {
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
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated successfully", student.student_code);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(student, "Student updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to update student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新学生失败: {e}"),
                )),
            )
        }
    }
}
