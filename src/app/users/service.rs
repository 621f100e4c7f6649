//! 用户业务服务

use std::sync::Arc;

use tracing::{info, warn};

use super::{
    model::{User, UserPayload},
    store::UserStore,
};
use crate::core::error::CoreError;

pub const USER_NOT_FOUND: &str = "User could not be found.";

#[derive(Clone)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn list_users(&self) -> Vec<User> {
        let users = self.store.list();
        info!(count = users.len(), "list users");
        users
    }

    pub fn get_user(&self, id: &str) -> Result<User, CoreError> {
        info!(id, "get user");
        self.store
            .get(id)
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 按路径 ID 插入或覆盖，请求体中的 ID 被忽略
    pub fn upsert_user(&self, id: &str, payload: &[u8]) -> Result<User, CoreError> {
        info!(id, "upsert user");
        let user = decode(payload)?.into_user(id.to_string());
        self.store.put(user.clone());
        Ok(user)
    }

    /// 生成新 ID 并写入
    pub fn create_user(&self, payload: &[u8]) -> Result<User, CoreError> {
        let payload = decode(payload)?;
        let user = self.store.insert_new(|id| payload.into_user(id));
        info!(id = %user.id, "create user");
        Ok(user)
    }

    /// 删除不存在的 ID 不算错误
    pub fn remove_user(&self, id: &str) {
        let removed = self.store.remove(id).is_some();
        info!(id, removed, "remove user");
    }
}

fn decode(payload: &[u8]) -> Result<UserPayload, CoreError> {
    serde_json::from_slice(payload).map_err(|err| {
        warn!(error = %err, "failed to decode user payload");
        CoreError::from(err)
    })
}
