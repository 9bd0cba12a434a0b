//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::{Uuid, Variant};

use crate::core::error::CoreError;

/// 用户记录，字段值按请求中的 JSON 原样保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: Value,
    pub age: Value,
    pub hobbies: Vec<Value>,
}

impl User {
    pub fn from_payload(id: String, payload: UserPayload) -> Self {
        Self {
            id,
            username: payload.username,
            age: payload.age,
            hobbies: payload.hobbies,
        }
    }
}

/// 创建/更新用户的请求内容，请求体中的 `id` 会被忽略
#[derive(Debug, Clone, PartialEq)]
pub struct UserPayload {
    pub username: Value,
    pub age: Value,
    pub hobbies: Vec<Value>,
}

impl UserPayload {
    /// `username` 和 `age` 必须为真值，`hobbies` 必须是数组，不检查类型
    pub fn from_body(body: &Value) -> Result<Self, CoreError> {
        let username = body.get("username").filter(|v| is_truthy(v));
        let age = body.get("age").filter(|v| is_truthy(v));
        let hobbies = body.get("hobbies").and_then(Value::as_array);

        match (username, age, hobbies) {
            (Some(username), Some(age), Some(hobbies)) => Ok(Self {
                username: username.clone(),
                age: age.clone(),
                hobbies: hobbies.clone(),
            }),
            _ => Err(CoreError::missing_fields()),
        }
    }
}

/// 真值判断：空字符串、0、NaN、null、false 以及缺失都视为假
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 校验 id 格式：带连字符的 36 位文本，版本号 1-8 且为 RFC 4122 变体；nil UUID 例外。
///
/// 校验通过后仍按原始文本比较，大小写不同视为不同的 id。
pub fn validate_user_id(raw: &str) -> Result<&str, CoreError> {
    if raw.len() != 36 {
        return Err(CoreError::invalid_user_id());
    }
    let id = Uuid::try_parse(raw).map_err(|_| CoreError::invalid_user_id())?;

    let versioned = (1..=8).contains(&id.get_version_num()) && id.get_variant() == Variant::RFC4122;
    if versioned || id.is_nil() {
        Ok(raw)
    } else {
        Err(CoreError::invalid_user_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(-0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("Ann")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_payload_accepts_empty_hobbies() {
        let payload =
            UserPayload::from_body(&json!({ "username": "Ann", "age": 31, "hobbies": [] }))
                .unwrap();
        assert_eq!(payload.username, "Ann");
        assert_eq!(payload.age, 31);
        assert!(payload.hobbies.is_empty());
    }

    #[test]
    fn test_payload_ignores_body_id() {
        let payload = UserPayload::from_body(&json!({
            "id": "not-used",
            "username": "Ann",
            "age": 31,
            "hobbies": ["chess"]
        }))
        .unwrap();
        assert_eq!(payload.hobbies, vec![json!("chess")]);
    }

    #[test]
    fn test_payload_rejects_falsy_fields() {
        for body in [
            json!({ "username": "Ann", "age": 0, "hobbies": [] }),
            json!({ "username": "", "age": 31, "hobbies": [] }),
            json!({ "age": 31, "hobbies": [] }),
            json!({ "username": "Ann", "age": null, "hobbies": [] }),
            json!({ "username": "Ann", "age": false, "hobbies": [] }),
            json!({ "username": "Ann", "age": 31 }),
            json!({ "username": "Ann", "age": 31, "hobbies": "chess" }),
            json!({}),
            json!(null),
            json!([1, 2, 3]),
        ] {
            let err = UserPayload::from_body(&body).unwrap_err();
            assert!(
                matches!(err, CoreError::BadRequest(ref msg) if msg == "Missing required fields"),
                "body {} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_payload_keeps_values_of_any_type() {
        let payload =
            UserPayload::from_body(&json!({ "username": "Ann", "age": "31", "hobbies": [] }))
                .unwrap();
        assert_eq!(payload.age, json!("31"));

        let payload = UserPayload::from_body(&json!({
            "username": 7,
            "age": true,
            "hobbies": [1, null, { "name": "chess" }]
        }))
        .unwrap();
        assert_eq!(payload.username, json!(7));
        assert_eq!(payload.age, json!(true));
        assert_eq!(payload.hobbies, vec![json!(1), json!(null), json!({ "name": "chess" })]);
    }

    #[test]
    fn test_validate_user_id() {
        let raw = "31ce49f8-f900-4896-a0b1-96b8957f81aa";
        assert_eq!(validate_user_id(raw).unwrap(), raw);
        assert!(validate_user_id("31CE49F8-F900-4896-A0B1-96B8957F81AA").is_ok());
        assert!(validate_user_id("00000000-0000-0000-0000-000000000000").is_ok());

        assert!(validate_user_id("not-a-uuid").is_err());
        assert!(validate_user_id("").is_err());
        // 不带连字符的简写形式同样拒绝
        assert!(validate_user_id("31ce49f8f9004896a0b196b8957f81aa").is_err());
        assert!(validate_user_id("31ce49f8-f900-4896-a0b1-96b8957f81zz").is_err());
    }

    #[test]
    fn test_validate_user_id_checks_version_and_variant() {
        // 版本号 0 与 9
        assert!(validate_user_id("31ce49f8-f900-0896-a0b1-96b8957f81aa").is_err());
        assert!(validate_user_id("31ce49f8-f900-9896-a0b1-96b8957f81aa").is_err());
        // 变体 c 与 7
        assert!(validate_user_id("31ce49f8-f900-4896-c0b1-96b8957f81aa").is_err());
        assert!(validate_user_id("31ce49f8-f900-4896-70b1-96b8957f81aa").is_err());
        // 版本号 1-8 均接受
        for version in 1..=8 {
            let raw = format!("31ce49f8-f900-{}896-b0b1-96b8957f81aa", version);
            assert!(validate_user_id(&raw).is_ok(), "{}", raw);
        }
    }
}
