use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::semesters::requests::{CreateSemesterRequest, SemesterListParams};
use crate::services::SemesterService;

// 懒加载的全局 SEMESTER_SERVICE 实例
static SEMESTER_SERVICE: Lazy<SemesterService> = Lazy::new(SemesterService::new_lazy);

// HTTP处理程序
pub async fn list_semesters(
    req: HttpRequest,
    query: web::Query<SemesterListParams>,
) -> ActixResult<HttpResponse> {
    SEMESTER_SERVICE
        .list_semesters(&req, query.into_inner())
        .await
}

pub async fn create_semester(
    req: HttpRequest,
    semester_data: web::Json<CreateSemesterRequest>,
) -> ActixResult<HttpResponse> {
    SEMESTER_SERVICE
        .create_semester(&req, semester_data.into_inner())
        .await
}

// 配置路由
pub fn configure_semester_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/semesters").service(
            web::resource("")
                .route(web::get().to(list_semesters))
                .route(web::post().to(create_semester)),
        ),
    );
}
