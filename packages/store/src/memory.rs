use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::credentials::CredentialStore;
use crate::models::CredentialEntry;

/// In-memory CredentialStore. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Arc<Mutex<HashMap<String, CredentialEntry>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CredentialEntry>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn find(&self, email: &str) -> Option<CredentialEntry> {
        self.entries().get(email).cloned()
    }

    async fn insert(&self, entry: CredentialEntry) {
        self.entries().insert(entry.email.clone(), entry);
    }

    async fn len(&self) -> usize {
        self.entries().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str, name: &str, password: &str) -> CredentialEntry {
        CredentialEntry {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.find("ann@x.com").await.is_none());

        store.insert(entry("ann@x.com", "Ann", "secret")).await;

        let found = store.find("ann@x.com").await.unwrap();
        assert_eq!(found.name, "Ann");
        assert_eq!(found.password, "secret");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.insert(entry("ann@x.com", "Ann", "secret")).await;
        assert!(store.find("Ann@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_overwrites() {
        let store = MemoryCredentialStore::new();
        store.insert(entry("ann@x.com", "Ann", "secret")).await;
        store.insert(entry("ann@x.com", "Annie", "other1")).await;

        assert_eq!(store.len().await, 1);
        let found = store.find("ann@x.com").await.unwrap();
        assert_eq!(found.name, "Annie");
        assert_eq!(found.password, "other1");
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryCredentialStore::new();
        let other = store.clone();
        other.insert(entry("bo@x.com", "Bo", "secret")).await;
        assert!(store.find("bo@x.com").await.is_some());
    }
}
