//! API token storage
//!
//! - `SecretStore` trait
//! - `EnvSecretStore`, `MemorySecretStore`, `ChainSecretStore`

mod traits;
mod env_store;
mod memory_store;
mod chain_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::{EnvSecretStore, API_TOKEN_KEY};
pub use memory_store::MemorySecretStore;
pub use chain_store::ChainSecretStore;
