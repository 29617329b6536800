pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::departments::requests::{CreateDepartmentRequest, DepartmentListParams};
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
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

    // 获取院系列表
    pub async fn list_departments(
        &self,
        request: &HttpRequest,
        query: DepartmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_departments(self, request, query).await
    }

    pub async fn create_department(
        &self,
        request: &HttpRequest,
        department_data: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, request, department_data).await
    }

    // 根据院系 ID 获取院系信息
    pub async fn get_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_department(self, request, department_id).await
    }
}
