use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::departments::requests::DepartmentListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
    query: DepartmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list departments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询院系列表失败: {e}"),
                )),
            )
        }
    }
}
