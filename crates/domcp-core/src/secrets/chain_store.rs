//! Chained secret store with fallback behavior

use std::sync::Arc;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Tries each store in order on reads; writes go to the first store
///
/// ```
/// use domcp_core::secrets::{ChainSecretStore, EnvSecretStore, MemorySecretStore, SecretStore};
/// use std::sync::Arc;
///
/// let flag = Arc::new(MemorySecretStore::with_secret("digitalocean", "from-flag"));
/// let chain = ChainSecretStore::new(vec![flag, Arc::new(EnvSecretStore::new())]);
/// assert_eq!(chain.get("digitalocean").as_deref(), Some("from-flag"));
/// ```
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
}

impl ChainSecretStore {
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self { stores }
    }

    pub fn stores(&self) -> &[Arc<dyn SecretStore>] {
        &self.stores
    }

    /// Find which store has a key
    pub fn find_store(&self, key: &str) -> Option<&Arc<dyn SecretStore>> {
        self.stores.iter().find(|s| s.has(key))
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.stores.iter().find_map(|s| s.get(key))
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        match self.stores.first() {
            Some(store) => store.store(key, value),
            None => Err(SecretStoreError::Other("empty store chain".to_string())),
        }
    }

    fn delete(&self, key: &str) -> SecretStoreResult<()> {
        // Read-only members keep their copy
        for store in self.stores.iter().filter(|s| s.has(key)) {
            let _ = store.delete(key);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ChainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stores.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSecretStore").field("stores", &names).finish()
    }
}
