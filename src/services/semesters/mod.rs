pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::semesters::requests::{CreateSemesterRequest, SemesterListParams};
use crate::storage::Storage;

pub struct SemesterService {
    storage: Option<Arc<dyn Storage>>,
}

impl SemesterService {
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

    // 获取学期列表
    pub async fn list_semesters(
        &self,
        request: &HttpRequest,
        query: SemesterListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_semesters(self, request, query).await
    }

    pub async fn create_semester(
        &self,
        request: &HttpRequest,
        semester_data: CreateSemesterRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_semester(self, request, semester_data).await
    }
}
