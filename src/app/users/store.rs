//! 用户内存存储

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use super::{
    id::{IdGenerator, IdStrategy},
    model::User,
};

struct Inner {
    users: HashMap<String, User>,
    ids: IdGenerator,
}

/// 以用户 ID 为键的内存存储
///
/// 所有读写都经过同一把互斥锁，每个操作只加锁一次。
pub struct UserStore {
    inner: Mutex<Inner>,
}

impl UserStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: HashMap::new(),
                ids: IdGenerator::new(strategy),
            }),
        }
    }

    pub fn with_users(strategy: IdStrategy, users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new(strategy);
        {
            let mut inner = store.lock();
            for user in users {
                inner.users.insert(user.id.clone(), user);
            }
        }
        store
    }

    // 临界区内不会留下不一致的状态，锁中毒时直接恢复
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().users.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.lock().users.get(id).cloned()
    }

    /// 插入或覆盖，键取自记录本身
    pub fn put(&self, user: User) -> Option<User> {
        self.lock().users.insert(user.id.clone(), user)
    }

    /// 分配新 ID 并写入，ID 分配与写入在同一临界区内完成
    pub fn insert_new(&self, build: impl FnOnce(String) -> User) -> User {
        let mut inner = self.lock();
        let Inner { users, ids } = &mut *inner;
        let id = ids.next_id(|candidate| users.contains_key(candidate));
        let user = build(id);
        users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn remove(&self, id: &str) -> Option<User> {
        self.lock().users.remove(id)
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
