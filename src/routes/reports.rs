use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ReportService;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn get_course_report(
    req: HttpRequest,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_course_report(&req, course_id.into_inner())
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports").service(
            // 课程维度的逐学生出勤率报表
            web::resource("/courses/{course_id}").route(web::get().to(get_course_report)),
        ),
    );
}
