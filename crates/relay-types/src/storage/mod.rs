//! Storage traits for pluggable storage implementations

pub mod errors;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use traits::{
	EventStorageTrait, ProviderStorageTrait, StorageStats, StorageTrait, TenantStorageTrait,
};
