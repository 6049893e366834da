use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::SessionStorage;

// Session-scoped storage: lives as long as the process and is never written to disk.
#[derive(Clone, Default)]
pub struct InMemorySessionStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().await;
        Ok(entries.remove(key).is_some())
    }
}
