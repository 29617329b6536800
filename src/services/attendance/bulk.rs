use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use super::mark::resolve_marked_by;
use crate::models::attendance::requests::{BulkAttendanceRequest, MarkAttendanceRequest};
use crate::models::attendance::responses::{BulkAttendanceResponse, BulkAttendanceResult};
use crate::models::{ApiResponse, ErrorCode};

/// 批量登记考勤
///
/// 逐条应用单条 upsert，按输入顺序返回每个学生的处理结果。
/// 单个学生失败（如学号不存在）不会中断批次，失败条目带上错误信息继续。
pub async fn mark_bulk_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    bulk_data: BulkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程安排整体校验一次
    match storage
        .get_class_schedule_by_id(bulk_data.class_schedule_id)
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

    let marked_by = resolve_marked_by(&storage, bulk_data.marked_by).await;

    let mut created_count = 0i64;
    let mut updated_count = 0i64;
    let mut failed_count = 0i64;
    let mut results = Vec::with_capacity(bulk_data.records.len());

    for item in bulk_data.records {
        // 逐条校验学生，缺失的跳过并报告
        match storage.get_student_by_id(item.student_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                failed_count += 1;
                results.push(BulkAttendanceResult {
                    student_id: item.student_id,
                    attendance_id: None,
                    created: None,
                    error: Some("Student not found".to_string()),
                });
                continue;
            }
            Err(e) => {
                failed_count += 1;
                results.push(BulkAttendanceResult {
                    student_id: item.student_id,
                    attendance_id: None,
                    created: None,
                    error: Some(format!("Failed to fetch student: {e}")),
                });
                continue;
            }
        }

        let mark_request = MarkAttendanceRequest {
            student_id: item.student_id,
            class_schedule_id: bulk_data.class_schedule_id,
            date: bulk_data.date,
            status: item.status,
            notes: item.notes,
            marked_by,
        };

        match storage.mark_attendance(mark_request).await {
            Ok((attendance, created)) => {
                if created {
                    created_count += 1;
                } else {
                    updated_count += 1;
                }
                results.push(BulkAttendanceResult {
                    student_id: item.student_id,
                    attendance_id: Some(attendance.id),
                    created: Some(created),
                    error: None,
                });
            }
            Err(e) => {
                failed_count += 1;
                results.push(BulkAttendanceResult {
                    student_id: item.student_id,
                    attendance_id: None,
                    created: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    info!(
        "Bulk attendance for schedule {} on {}: {} created, {} updated, {} failed",
        bulk_data.class_schedule_id, bulk_data.date, created_count, updated_count, failed_count
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BulkAttendanceResponse {
            created: created_count,
            updated: updated_count,
            failed: failed_count,
            results,
        },
        "Bulk attendance processed",
    )))
}
