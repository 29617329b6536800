use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::services::CourseService;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.into_inner()).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: web::Path<i64>,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.into_inner(), update_data.into_inner())
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course)),
            ),
    );
}
