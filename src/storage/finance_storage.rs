use crate::storage::{Storage, UserRecord};
use crate::types::UserId;
use dashmap::DashMap;
use std::sync::Arc;

pub struct FinanceStorage {
    cache: Arc<DashMap<UserId, UserRecord>>
}

impl FinanceStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }
}

impl Default for FinanceStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FinanceStorage {
    fn load(&self, user_id: &str) -> Option<UserRecord> {
        self.cache.get(user_id).map(|record| record.value().clone())
    }

    fn save(&self, user_id: &str, record: UserRecord) {
        self.cache.insert(user_id.to_string(), record);
    }

    fn update<R>(&self, user_id: &str, change: impl FnOnce(&mut UserRecord) -> R) -> Option<R> {
        self.cache.get_mut(user_id).map(|mut record| change(record.value_mut()))
    }

    fn upsert<R>(&self, user_id: &str, change: impl FnOnce(&mut UserRecord) -> R) -> R {
        let mut record = self.cache.entry(user_id.to_string()).or_default();
        change(record.value_mut())
    }

    fn users(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.cache.iter().map(|item| item.key().clone()).collect();
        users.sort();
        users
    }
}
