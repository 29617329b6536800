use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::RosterParams;
use crate::models::schedules::requests::{CreateScheduleRequest, ScheduleListParams};
use crate::services::ScheduleService;

// 懒加载的全局 SCHEDULE_SERVICE 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

// HTTP处理程序
pub async fn list_schedules(
    req: HttpRequest,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(&req, query.into_inner())
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    schedule_data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(&req, schedule_data.into_inner())
        .await
}

pub async fn get_roster(
    req: HttpRequest,
    schedule_id: web::Path<i64>,
    query: web::Query<RosterParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .get_roster(&req, schedule_id.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedules")
            .service(
                web::resource("")
                    .route(web::get().to(list_schedules))
                    .route(web::post().to(create_schedule)),
            )
            .service(
                // 点名册：院系学生名单 + 当天已有状态
                web::resource("/{schedule_id}/roster").route(web::get().to(get_roster)),
            ),
    );
}
