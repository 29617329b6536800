pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{CreateTeacherRequest, TeacherListParams};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取教师列表
    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        query: TeacherListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, query).await
    }

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, teacher_data).await
    }
}
