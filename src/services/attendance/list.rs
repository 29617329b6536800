use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::requests::{AttendanceListParams, AttendanceListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    params: AttendanceListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AttendanceListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: params.student_id,
        class_schedule_id: params.class_schedule_id,
        course_id: params.course_id,
        status: params.status,
        date_from: params.date_from,
        date_to: params.date_to,
    };

    match storage.list_attendance_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Failed to list attendance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤列表失败: {e}"),
                )),
            )
        }
    }
}
