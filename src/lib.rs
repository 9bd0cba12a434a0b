//! # users-api
//!
//! 基于 Axum 的用户 CRUD 服务，数据只保存在进程内存中：
//! - `GET /users`、`POST /users`
//! - `GET|PUT|DELETE /users/:id`
//!
//! 所有非空响应都是 JSON，错误响应格式为 `{"message": "..."}`。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, users::UserStore};
pub use config::ServerConfig;
pub use crate::core::error::CoreError;
