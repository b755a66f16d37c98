//! Quote request model and validation

use serde::{Deserialize, Serialize};

use super::{QuoteValidationError, QuoteValidationResult};

/// API request body for POST /v1/quotes
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuoteRequest {
	/// Asset to convert from
	pub from_asset: String,
	/// Asset to convert to
	pub to_asset: String,
	/// Input amount in base units, as a decimal string
	pub amount: String,
	/// Chain the conversion is priced on
	pub chain_id: u64,
}

impl QuoteRequest {
	/// Validate the request before dispatching to any provider
	pub fn validate(&self) -> QuoteValidationResult<()> {
		if self.from_asset.trim().is_empty() {
			return Err(QuoteValidationError::MissingField {
				field: "fromAsset".to_string(),
			});
		}
		if self.to_asset.trim().is_empty() {
			return Err(QuoteValidationError::MissingField {
				field: "toAsset".to_string(),
			});
		}

		let amount: u128 =
			self.amount
				.parse()
				.map_err(|_| QuoteValidationError::InvalidAmount {
					reason: format!("'{}' is not a valid base-unit amount", self.amount),
				})?;
		if amount == 0 {
			return Err(QuoteValidationError::InvalidAmount {
				reason: "amount must be greater than zero".to_string(),
			});
		}

		if self.chain_id == 0 {
			return Err(QuoteValidationError::InvalidChainId);
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn create_valid_request() -> QuoteRequest {
		QuoteRequest {
			from_asset: "ETH".to_string(),
			to_asset: "USDC".to_string(),
			amount: "1000000000000000000".to_string(),
			chain_id: 1,
		}
	}

	#[test]
	fn test_valid_request() {
		assert!(create_valid_request().validate().is_ok());
	}

	#[test]
	fn test_empty_asset_rejected() {
		let mut request = create_valid_request();
		request.from_asset = "".to_string();
		assert!(request.validate().is_err());
	}

	#[test]
	fn test_zero_amount_rejected() {
		let mut request = create_valid_request();
		request.amount = "0".to_string();
		assert!(matches!(
			request.validate(),
			Err(QuoteValidationError::InvalidAmount { .. })
		));
	}

	#[test]
	fn test_non_numeric_amount_rejected() {
		let mut request = create_valid_request();
		request.amount = "1.5e18".to_string();
		assert!(request.validate().is_err());
	}

	#[test]
	fn test_zero_chain_id_rejected() {
		let mut request = create_valid_request();
		request.chain_id = 0;
		assert!(matches!(
			request.validate(),
			Err(QuoteValidationError::InvalidChainId)
		));
	}
}
