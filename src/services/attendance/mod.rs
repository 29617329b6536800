pub mod bulk;
pub mod list;
pub mod logs;
pub mod mark;
pub mod stats;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::attendance::requests::{
    AttendanceListParams, BulkAttendanceRequest, MarkAttendanceRequest,
};
use crate::storage::Storage;

pub use summary::summarize;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 登记单条考勤（upsert）
    pub async fn mark_attendance(
        &self,
        request: &HttpRequest,
        mark_data: MarkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, mark_data).await
    }

    // 批量登记考勤
    pub async fn mark_bulk_attendance(
        &self,
        request: &HttpRequest,
        bulk_data: BulkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        bulk::mark_bulk_attendance(self, request, bulk_data).await
    }

    // 查询考勤列表
    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    // 查询某学生的考勤统计
    pub async fn get_student_stats(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::get_student_stats(self, request, student_id).await
    }

    // 查询某条考勤记录的变更日志
    pub async fn list_logs(
        &self,
        request: &HttpRequest,
        attendance_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        logs::list_logs(self, request, attendance_id).await
    }
}
