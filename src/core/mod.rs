//! 核心模块：错误、响应、请求体解析与中间件

pub mod body;
pub mod error;
pub mod middleware;
pub mod response;
