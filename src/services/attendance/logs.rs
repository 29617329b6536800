use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;
use uuid::Uuid;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};

/// 查询某条考勤记录的变更日志（按时间倒序）
pub async fn list_logs(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance_logs(attendance_id).await {
        Ok(logs) => Ok(HttpResponse::Ok().json(ApiResponse::success(logs, "查询成功"))),
        Err(e) => {
            error!("Failed to list attendance logs: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤日志失败: {e}"),
                )),
            )
        }
    }
}
