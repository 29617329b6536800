use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::ScheduleService;
use crate::models::schedules::requests::CreateScheduleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_data: CreateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 星期取值 1-7
    if !(1..=7).contains(&schedule_data.day_of_week) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "day_of_week must be between 1 (Monday) and 7 (Sunday)",
        )));
    }

    if schedule_data.end_time <= schedule_data.start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "end_time must be after start_time",
        )));
    }

    // 关联实体校验
    if let Err(response) = check_schedule_references(&storage, &schedule_data).await {
        return Ok(response);
    }

    match storage.create_class_schedule(schedule_data).await {
        Ok(schedule) => {
            info!(
                "Class schedule {} created successfully (course {}, day {})",
                schedule.id, schedule.course_id, schedule.day_of_week
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                schedule,
                "Class schedule created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Class schedule creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

/// 校验课程、教师、学期均存在
async fn check_schedule_references(
    storage: &Arc<dyn Storage>,
    schedule_data: &CreateScheduleRequest,
) -> Result<(), HttpResponse> {
    match storage.get_course_by_id(schedule_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    }

    match storage.get_teacher_by_id(schedule_data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            error!("Failed to get teacher by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching teacher",
                )),
            );
        }
    }

    match storage.get_semester_by_id(schedule_data.semester_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SemesterNotFound,
                "Semester not found",
            )));
        }
        Err(e) => {
            error!("Failed to get semester by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching semester",
                )),
            );
        }
    }

    Ok(())
}
