//! Relay Storage
//!
//! Pluggable storage backends for the quote-relay orchestrator. The default
//! `MemoryStore` keeps everything in process memory; production deployments
//! can swap in another backend behind the same traits.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{
	EventStorage, ProviderStorage, Storage, StorageError, StorageResult, TenantStorage,
};
