use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DashboardService;
use crate::models::dashboard::responses::DashboardStatsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::attendance::summarize;

/// 概览统计：实体总量 + 当天考勤汇总
pub async fn get_stats(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let total_students = match storage.count_active_students().await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal_error("统计学生数量失败", e)),
    };

    let total_courses = match storage.count_active_courses().await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal_error("统计课程数量失败", e)),
    };

    let total_teachers = match storage.count_active_teachers().await {
        Ok(count) => count as i64,
        Err(e) => return Ok(internal_error("统计教师数量失败", e)),
    };

    let today = chrono::Utc::now().date_naive();
    let today_records = match storage.list_attendance_by_date(today).await {
        Ok(records) => records,
        Err(e) => return Ok(internal_error("查询当日考勤失败", e)),
    };

    let summary = summarize(&today_records);

    let response = DashboardStatsResponse {
        total_students,
        total_courses,
        total_teachers,
        present_today: summary.present,
        absent_today: summary.absent,
        attendance_rate: summary.present_percentage,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}

fn internal_error(context: &str, e: crate::errors::AttendanceError) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {e}"),
    ))
}
