//! 核心响应处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INVALID_USER_ID: &str = "Invalid userId format";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// JSON 响应：状态码 + 序列化后的数据，`Content-Type: application/json`
#[derive(Debug)]
pub struct JsonReply<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> JsonReply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}
