//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use relay_types::storage::{
	EventStorageTrait as EventStorage, ProviderStorageTrait as ProviderStorage, StorageError,
	StorageResult, StorageTrait as Storage, TenantStorageTrait as TenantStorage,
};
