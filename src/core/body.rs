//! 请求体解析
//!
//! 读完整个请求体后再按 JSON 解析。空请求体或解析失败都视为空对象，
//! 只有读取过程中的传输错误才会向上返回。

use axum::body::{to_bytes, Body};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::CoreError;

pub async fn read_json_body(body: Body) -> Result<Value, CoreError> {
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|err| CoreError::Internal(format!("读取请求体失败: {}", err)))?;

    Ok(parse_json_or_empty(&bytes))
}

pub fn parse_json_or_empty(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "请求体不是合法 JSON，按空对象处理");
            Value::Object(Map::new())
        }
    }
}
