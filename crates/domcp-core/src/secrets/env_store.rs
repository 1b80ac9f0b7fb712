//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Logical key under which the API token is looked up
pub const API_TOKEN_KEY: &str = "digitalocean";

/// Mapping from logical names to environment variable names, tried in order
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        API_TOKEN_KEY,
        vec!["DIGITALOCEAN_API_TOKEN", "DIGITALOCEAN_ACCESS_TOKEN", "DO_API_TOKEN"],
    );
    m
});

/// Read-only secret store backed by the process environment
///
/// `get("digitalocean")` checks `DIGITALOCEAN_API_TOKEN`, then
/// `DIGITALOCEAN_ACCESS_TOKEN`, then `DO_API_TOKEN`. Any other key is read
/// as a raw variable name. Empty values count as unset.
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get the environment variable names for a logical key
    pub fn env_vars_for(key: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP.get(key.to_lowercase().as_str()).map(|v| v.as_slice())
    }

    fn non_empty(var: &str) -> Option<String> {
        env::var(var).ok().filter(|v| !v.is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(vars) = Self::env_vars_for(key) {
            return vars.iter().find_map(|v| Self::non_empty(v));
        }
        Self::non_empty(key)
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_read_only() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
        assert!(matches!(store.store("test", "value"), Err(SecretStoreError::ReadOnly)));
        assert!(matches!(store.delete("test"), Err(SecretStoreError::ReadOnly)));
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("DOMCP_TEST_SECRET_12345", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("DOMCP_TEST_SECRET_12345"), Some("test_value".to_string()));

        env::remove_var("DOMCP_TEST_SECRET_12345");
        assert_eq!(store.get("DOMCP_TEST_SECRET_12345"), None);
    }

    #[test]
    fn test_env_store_token_variables() {
        let vars = EnvSecretStore::env_vars_for("DigitalOcean").unwrap();
        assert_eq!(vars[0], "DIGITALOCEAN_API_TOKEN");
        assert!(EnvSecretStore::env_vars_for("aws").is_none());
    }

    #[test]
    fn test_env_store_require_missing() {
        let store = EnvSecretStore::new();
        assert!(matches!(
            store.require("DOMCP_DEFINITELY_UNSET_XYZ"),
            Err(SecretStoreError::NotFound(_))
        ));
    }
}
