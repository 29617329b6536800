use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::models::attendance::requests::{
    AttendanceListParams, BulkAttendanceRequest, MarkAttendanceRequest,
};
use crate::services::AttendanceService;

// 懒加载的全局 ATTENDANCE_SERVICE 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, query.into_inner())
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(&req, mark_data.into_inner())
        .await
}

pub async fn mark_bulk_attendance(
    req: HttpRequest,
    bulk_data: web::Json<BulkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_bulk_attendance(&req, bulk_data.into_inner())
        .await
}

pub async fn get_student_stats(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_student_stats(&req, student_id.into_inner())
        .await
}

pub async fn list_attendance_logs(
    req: HttpRequest,
    attendance_id: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_logs(&req, attendance_id.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .service(
                web::resource("")
                    // 查询考勤列表，登记单条考勤（upsert）
                    .route(web::get().to(list_attendance))
                    .route(web::post().to(mark_attendance)),
            )
            .service(
                // 整组点名，逐条 upsert，部分失败不阻断
                web::resource("/bulk").route(web::post().to(mark_bulk_attendance)),
            )
            .service(
                // 学生个人考勤统计
                web::resource("/students/{student_id}/stats")
                    .route(web::get().to(get_student_stats)),
            )
            .service(
                // 单条考勤的变更日志
                web::resource("/{attendance_id}/logs")
                    .route(web::get().to(list_attendance_logs)),
            ),
    );
}
