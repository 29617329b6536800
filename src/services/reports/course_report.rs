use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::responses::{CourseReportResponse, CourseReportRow};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::attendance::summarize;

/// 课程考勤报表
///
/// 对课程所属院系的每个在读学生，统计其在该课程下的
/// 出勤次数与出勤率。
pub async fn get_course_report(
    service: &ReportService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
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

    let mut rows = Vec::with_capacity(students.len());
    for (student, user) in students {
        let records = match storage
            .list_attendance_by_student_and_course(student.id, course_id)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to list attendance for student {}: {}", student.id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学生课程考勤失败: {e}"),
                    )),
                );
            }
        };

        let summary = summarize(&records);
        rows.push(CourseReportRow {
            student_id: student.id,
            student_code: student.student_code,
            name: user.display_name.unwrap_or(user.username),
            total: summary.total,
            present: summary.present,
            present_percentage: summary.present_percentage,
        });
    }

    let response = CourseReportResponse {
        course_id: course.id,
        course_name: course.name,
        course_code: course.code,
        rows,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
