//! Validation limits shared across request types

/// Maximum length for tenant display names
pub const MAX_DISPLAY_NAME_LEN: usize = 128;

/// Maximum length for tenant theme identifiers
pub const MAX_THEME_LEN: usize = 64;

/// Maximum serialized size of an event payload in bytes
pub const MAX_EVENT_PAYLOAD_BYTES: usize = 64 * 1024;

/// Minimum per-provider timeout in milliseconds
pub const MIN_PROVIDER_TIMEOUT_MS: u64 = 100;

/// Maximum per-provider timeout in milliseconds
pub const MAX_PROVIDER_TIMEOUT_MS: u64 = 30_000;
