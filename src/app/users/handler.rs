//! 用户处理器

use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

use super::{
    model::{validate_user_id, User, UserPayload},
    store::UserStore,
};
use crate::core::{body::read_json_body, error::CoreError, response::JsonReply};

/// `/users/:id` 及其后续路径段，只取 id，其余段忽略
#[derive(Debug, Deserialize)]
pub struct MemberPath {
    pub id: String,
}

pub async fn list_users(State(store): State<UserStore>) -> JsonReply<Vec<User>> {
    JsonReply::ok(store.list())
}

pub async fn get_user(
    State(store): State<UserStore>,
    Path(MemberPath { id }): Path<MemberPath>,
) -> Result<JsonReply<User>, CoreError> {
    let id = validate_user_id(&id)?;
    Ok(JsonReply::ok(store.get(id)?))
}

pub async fn create_user(
    State(store): State<UserStore>,
    body: Body,
) -> Result<JsonReply<User>, CoreError> {
    let body = read_json_body(body).await?;
    let payload = UserPayload::from_body(&body)?;

    let user = store.create(payload);
    info!(id = %user.id, "用户已创建");
    Ok(JsonReply::created(user))
}

/// 先确认用户存在，再读取请求体
pub async fn update_user(
    State(store): State<UserStore>,
    Path(MemberPath { id }): Path<MemberPath>,
    body: Body,
) -> Result<JsonReply<User>, CoreError> {
    let id = validate_user_id(&id)?;
    let index = store.locate(id)?;

    let body = read_json_body(body).await?;
    let payload = UserPayload::from_body(&body)?;

    let user = store.replace_at(index, id, payload);
    info!(%id, "用户已更新");
    Ok(JsonReply::ok(user))
}

pub async fn delete_user(
    State(store): State<UserStore>,
    Path(MemberPath { id }): Path<MemberPath>,
) -> Result<StatusCode, CoreError> {
    let id = validate_user_id(&id)?;
    store.delete(id)?;
    info!(%id, "用户已删除");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found() -> CoreError {
    CoreError::resource_not_found()
}
