use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::DashboardService;

// 懒加载的全局 DASHBOARD_SERVICE 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

// HTTP处理程序
pub async fn get_dashboard_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_stats(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .service(web::resource("/stats").route(web::get().to(get_dashboard_stats))),
    );
}
