//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::response::{
    ErrorBody, INTERNAL_SERVER_ERROR, INVALID_USER_ID, MISSING_REQUIRED_FIELDS, RESOURCE_NOT_FOUND,
};

/// 核心错误类型
///
/// `Internal` 携带的细节只写入日志，客户端只会看到固定的 `Internal Server Error`。
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn invalid_user_id() -> Self {
        CoreError::BadRequest(INVALID_USER_ID.to_string())
    }

    pub fn missing_fields() -> Self {
        CoreError::BadRequest(MISSING_REQUIRED_FIELDS.to_string())
    }

    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        CoreError::NotFound(format!("User with id {} not found", id))
    }

    pub fn resource_not_found() -> Self {
        CoreError::NotFound(RESOURCE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => msg,
            CoreError::Internal(detail) => {
                error!(%detail, "请求处理失败");
                INTERNAL_SERVER_ERROR.to_string()
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
