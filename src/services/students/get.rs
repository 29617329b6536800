use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            )
        }
    }
}
