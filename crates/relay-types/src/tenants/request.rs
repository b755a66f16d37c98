//! Tenant registration request model and validation

use serde::{Deserialize, Serialize};

use crate::constants::limits::{MAX_DISPLAY_NAME_LEN, MAX_THEME_LEN};

use super::{TenantValidationError, TenantValidationResult};

/// API request body for POST /v1/tenants
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterTenantRequest {
	/// Human-readable tenant name (required, non-empty)
	pub display_name: String,
	/// Theme identifier; defaults when omitted
	#[serde(skip_serializing_if = "Option::is_none")]
	pub theme: Option<String>,
}

impl RegisterTenantRequest {
	/// Validate the registration request before it reaches the domain layer
	pub fn validate(&self) -> TenantValidationResult<()> {
		if self.display_name.trim().is_empty() {
			return Err(TenantValidationError::MissingDisplayName);
		}
		if self.display_name.len() > MAX_DISPLAY_NAME_LEN {
			return Err(TenantValidationError::DisplayNameTooLong {
				max: MAX_DISPLAY_NAME_LEN,
				actual: self.display_name.len(),
			});
		}
		if let Some(theme) = &self.theme {
			if theme.len() > MAX_THEME_LEN {
				return Err(TenantValidationError::ThemeTooLong {
					max: MAX_THEME_LEN,
					actual: theme.len(),
				});
			}
		}
		Ok(())
	}
}
