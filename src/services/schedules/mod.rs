pub mod create;
pub mod list;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::RosterParams;
use crate::models::schedules::requests::{CreateScheduleRequest, ScheduleListParams};
use crate::storage::Storage;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
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

    // 获取课程安排列表
    pub async fn list_schedules(
        &self,
        request: &HttpRequest,
        query: ScheduleListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schedules(self, request, query).await
    }

    pub async fn create_schedule(
        &self,
        request: &HttpRequest,
        schedule_data: CreateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_schedule(self, request, schedule_data).await
    }

    // 获取某课程安排的点名册
    pub async fn get_roster(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
        params: RosterParams,
    ) -> ActixResult<HttpResponse> {
        roster::get_roster(self, request, schedule_id, params).await
    }
}
