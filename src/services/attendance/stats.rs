use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use super::summary::summarize;
use crate::models::{ApiResponse, ErrorCode};

/// 查询某学生的考勤统计（出勤/缺勤/迟到/请假计数与出勤率）
pub async fn get_student_stats(
    service: &AttendanceService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验学生存在
    match storage.get_student_by_id(student_id).await {
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

    match storage.list_attendance_by_student(student_id).await {
        Ok(records) => {
            let summary = summarize(&records);
            Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "查询成功")))
        }
        Err(e) => {
            error!("Failed to list attendance for student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生考勤失败: {e}"),
                )),
            )
        }
    }
}
