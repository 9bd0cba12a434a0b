//! 用户内存存储
//!
//! 按插入顺序保存用户，没有索引，按 id 查找都是线性扫描。
//! 每个操作只在同步代码中短暂持锁，不跨越 `.await`。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::json;
use uuid::Uuid;

use super::model::{User, UserPayload};
use crate::core::error::CoreError;

pub const SEED_USER_ID: &str = "31ce49f8-f900-4896-a0b1-96b8957f81aa";

#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// 进程启动时的初始数据
    pub fn seeded() -> Self {
        Self::with_users(vec![User {
            id: SEED_USER_ID.to_string(),
            username: json!("Mike Doe"),
            age: json!(20),
            hobbies: vec![json!("fishing"), json!("gaming")],
        }])
    }

    // 每次修改都是单步完成，锁中毒时数据仍然完整，直接继续使用
    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 按 id 文本精确匹配
    pub fn get(&self, id: &str) -> Result<User, CoreError> {
        self.lock()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| CoreError::user_not_found(id))
    }

    /// 返回用户在存储中的下标
    pub fn locate(&self, id: &str) -> Result<usize, CoreError> {
        self.lock()
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CoreError::user_not_found(id))
    }

    pub fn create(&self, payload: UserPayload) -> User {
        let user = User::from_payload(Uuid::new_v4().to_string(), payload);
        self.lock().push(user.clone());
        user
    }

    /// 整体替换 `index` 处的记录。
    ///
    /// 查找和写入之间不持锁，其它请求可能已经删除了记录；
    /// 下标越界时追加到末尾，后写者覆盖先写者。
    pub fn replace_at(&self, index: usize, id: &str, payload: UserPayload) -> User {
        let user = User::from_payload(id.to_string(), payload);
        let mut users = self.lock();
        match users.get_mut(index) {
            Some(slot) => *slot = user.clone(),
            None => users.push(user.clone()),
        }
        user
    }

    pub fn delete(&self, id: &str) -> Result<User, CoreError> {
        let mut users = self.lock();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CoreError::user_not_found(id))?;
        Ok(users.remove(index))
    }
}
