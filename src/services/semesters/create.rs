use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::SemesterService;
use crate::models::semesters::requests::CreateSemesterRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_semester(
    service: &SemesterService,
    request: &HttpRequest,
    semester_data: CreateSemesterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 结束日期不能早于开始日期
    if semester_data.end_date < semester_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "end_date must not be before start_date",
        )));
    }

    // "最多一个当前学期" 未在存储层强制，重复标记时仅告警
    if semester_data.is_current {
        warn!("Creating semester marked as current; existing current flags are not cleared");
    }

    match storage.create_semester(semester_data).await {
        Ok(semester) => {
            info!("Semester {} created successfully", semester.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                semester,
                "Semester created successfully",
            )))
        }
        Err(e) => Ok(handle_semester_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_semester_create_error(e: &str) -> HttpResponse {
    let msg = format!("Semester creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SemesterAlreadyExists,
            "Semester code already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
