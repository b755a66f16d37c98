//! Core quote domain models
//!
//! Quote requests and results are transient: they are constructed per call
//! and never persisted. The router keeps only the winning result beyond the
//! request scope.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{QuoteError, QuoteValidationError};
pub use request::QuoteRequest;
pub use response::QuoteResponse;

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;

/// A normalized quote from a single provider
///
/// Amounts are decimal strings in base units to preserve precision across
/// provider wire formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
	/// Name of the provider that produced this quote
	pub provider_name: String,

	/// Input amount in base units
	pub from_amount: String,

	/// Output amount in base units
	pub to_amount: String,

	/// Estimated execution cost in base units
	pub estimated_cost: String,
}

impl QuoteResult {
	pub fn new(
		provider_name: String,
		from_amount: String,
		to_amount: String,
		estimated_cost: String,
	) -> Self {
		Self {
			provider_name,
			from_amount,
			to_amount,
			estimated_cost,
		}
	}

	/// Parse the output amount for ranking
	pub fn to_amount_units(&self) -> Result<u128, QuoteError> {
		self.to_amount
			.parse()
			.map_err(|_| QuoteError::ProcessingFailed {
				reason: format!("Invalid toAmount '{}'", self.to_amount),
			})
	}

	/// Parse the estimated cost for ranking tie-breaks
	pub fn estimated_cost_units(&self) -> Result<u128, QuoteError> {
		self.estimated_cost
			.parse()
			.map_err(|_| QuoteError::ProcessingFailed {
				reason: format!("Invalid estimatedCost '{}'", self.estimated_cost),
			})
	}
}
