use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScheduleService;
use crate::models::attendance::requests::RosterParams;
use crate::models::attendance::responses::{RosterClassInfo, RosterResponse, RosterStudent};
use crate::models::{ApiResponse, ErrorCode};

/// 获取点名册
///
/// 返回课程所属院系的在读学生，以及每个学生当天已有的考勤状态，
/// 供录入界面预填。
pub async fn get_roster(
    service: &ScheduleService,
    request: &HttpRequest,
    schedule_id: i64,
    params: RosterParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let schedule = match storage.get_class_schedule_by_id(schedule_id).await {
        Ok(Some(schedule)) => schedule,
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
    };

    let course = match storage.get_course_by_id(schedule.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    };

    let date = params
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let students = match storage
        .list_students_by_department(course.department_id, true)
        .await
    {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to list students by department: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询院系学生失败: {e}"),
                )),
            );
        }
    };

    let mut roster = Vec::with_capacity(students.len());
    for (student, user) in students {
        let existing_status = match storage
            .get_attendance_by_key(student.id, schedule_id, date)
            .await
        {
            Ok(record) => record.map(|a| a.status),
            Err(e) => {
                error!("Failed to get attendance by key: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询已有考勤失败: {e}"),
                    )),
                );
            }
        };

        roster.push(RosterStudent {
            student_id: student.id,
            student_code: student.student_code,
            name: user.display_name.unwrap_or(user.username),
            email: user.email,
            existing_status,
        });
    }

    let response = RosterResponse {
        class_info: RosterClassInfo {
            class_schedule_id: schedule.id,
            course_name: course.name,
            course_code: course.code,
            day_of_week: schedule.day_of_week,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            room: schedule.room,
        },
        date,
        students: roster,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
