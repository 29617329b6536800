use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_department_by_id(department_id).await {
        Ok(Some(department)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(department, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => {
            error!("Failed to get department by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询院系失败: {e}"),
                )),
            )
        }
    }
}
