use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::attendance::responses::MarkAttendanceResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    mut mark_data: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验学生存在
    match storage.get_student_by_id(mark_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            );
        }
    }

    // 校验课程安排存在
    match storage
        .get_class_schedule_by_id(mark_data.class_schedule_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleNotFound,
                "Class schedule not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class schedule by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching class schedule",
                )),
            );
        }
    }

    // 登记人账号不存在时清空关联，而不是让登记失败
    mark_data.marked_by = resolve_marked_by(&storage, mark_data.marked_by).await;

    match storage.mark_attendance(mark_data).await {
        Ok((attendance, created)) => {
            info!(
                "Attendance {} for student {} on {} ({})",
                if created { "created" } else { "updated" },
                attendance.student_id,
                attendance.date,
                attendance.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkAttendanceResponse {
                    attendance,
                    created,
                },
                "Attendance marked successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Attendance marking failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

/// 解析登记人账号：查不到就置空
pub(super) async fn resolve_marked_by(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    marked_by: Option<i64>,
) -> Option<i64> {
    match marked_by {
        Some(user_id) => match storage.get_user_by_id(user_id).await {
            Ok(Some(user)) => Some(user.id),
            _ => None,
        },
        None => None,
    }
}
