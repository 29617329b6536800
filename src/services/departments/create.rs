use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::DepartmentService;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_data: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_department(department_data).await {
        Ok(department) => {
            info!("Department {} created successfully", department.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                department,
                "Department created successfully",
            )))
        }
        Err(e) => Ok(handle_department_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_department_create_error(e: &str) -> HttpResponse {
    let msg = format!("Department creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::DepartmentAlreadyExists,
            "Department code already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
