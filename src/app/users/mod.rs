//! 用户资源：模型、内存存储与处理器

pub mod handler;
pub mod model;
pub mod store;

pub use model::{User, UserPayload};
pub use store::UserStore;
