use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::{CreateTeacherRequest, TeacherListParams};
use crate::services::TeacherService;

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teachers(&req, query.into_inner())
        .await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, teacher_data.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers").service(
            web::resource("")
                .route(web::get().to(list_teachers))
                .route(web::post().to(create_teacher)),
        ),
    );
}
