//! Error types for tenant operations

use thiserror::Error;

/// Validation errors for tenant registration
#[derive(Debug, Error)]
pub enum TenantValidationError {
	#[error("displayName is required and cannot be empty")]
	MissingDisplayName,

	#[error("displayName exceeds maximum length of {max} characters (got {actual})")]
	DisplayNameTooLong { max: usize, actual: usize },

	#[error("theme exceeds maximum length of {max} characters (got {actual})")]
	ThemeTooLong { max: usize, actual: usize },
}
