//! 路由组装

pub mod users;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::core::middleware::{panic_response, request_logging_middleware};
use users::{
    handler::{create_user, delete_user, get_user, list_users, not_found, update_user},
    UserStore,
};

// `get` 默认也会响应 HEAD，这里显式交给 404
// `/users` 与 `/users/` 都视为不带 id 的集合路径
fn collection_routes() -> MethodRouter<UserStore> {
    get(list_users)
        .head(not_found)
        .post(create_user)
        .fallback(not_found)
}

fn member_routes() -> MethodRouter<UserStore> {
    get(get_user)
        .head(not_found)
        .put(update_user)
        .delete(delete_user)
        .fallback(not_found)
}

/// 创建应用路由，未匹配的方法和路径统一返回 404
pub fn build_router(store: UserStore) -> Router {
    Router::new()
        .route("/users", collection_routes())
        .route("/users/", collection_routes())
        .route("/users/:id", member_routes())
        .route("/users/:id/", member_routes())
        .route("/users/:id/*rest", member_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(store)
}
