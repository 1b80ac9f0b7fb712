//! In-memory secret store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{SecretStore, SecretStoreResult};

/// In-memory, read-write secret store
///
/// Holds a token passed on the command line so it can sit in front of the
/// environment in a `ChainSecretStore`.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single secret
    pub fn with_secret(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut secrets = HashMap::new();
        secrets.insert(key.into(), value.into());
        Self {
            secrets: RwLock::new(secrets),
        }
    }

    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets.read().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        self.secrets.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> SecretStoreResult<()> {
        self.secrets.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySecretStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("digitalocean"), None);

        store.store("digitalocean", "dop_v1_abc").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("digitalocean"), Some("dop_v1_abc".to_string()));
        assert!(store.has("digitalocean"));

        store.delete("digitalocean").unwrap();
        assert!(!store.has("digitalocean"));
    }

    #[test]
    fn test_memory_store_with_secret() {
        let store = MemorySecretStore::with_secret("digitalocean", "token");
        assert_eq!(store.require("digitalocean").unwrap(), "token");
    }
}
