//! 请求参数错误处理
//!
//! 把 actix 的 JSON/查询参数解析错误转换成统一的 ApiResponse 错误响应，
//! 不合法的状态、日期等在反序列化阶段即被拦截。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParams,
        format!("Invalid request body: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParams,
        format!("Invalid query parameters: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
