//! API 帮助函数

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, warn};

use crate::errors::LinkshelfError;

use super::error_code::ErrorCode;
use super::types::ErrorBody;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorBody {
            code,
            message: message.to_string(),
        },
    )
}

/// 从 LinkshelfError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_linkshelf(err: &LinkshelfError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("API: {}", err);
    } else {
        warn!("API: {}", err);
    }
    error_response(status, ErrorCode::from(err), err.message())
}

/// Malformed JSON bodies get the same error shape as validation failures
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &message);
    InternalError::from_response(err, response).into()
}
