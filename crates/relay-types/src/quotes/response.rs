//! Quote API response models

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::QuoteResult;

/// API response for POST /v1/quotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	pub provider_name: String,
	pub from_amount: String,
	pub to_amount: String,
	pub estimated_cost: String,
	pub timestamp: i64,
}

impl From<&QuoteResult> for QuoteResponse {
	fn from(result: &QuoteResult) -> Self {
		Self {
			provider_name: result.provider_name.clone(),
			from_amount: result.from_amount.clone(),
			to_amount: result.to_amount.clone(),
			estimated_cost: result.estimated_cost.clone(),
			timestamp: Utc::now().timestamp(),
		}
	}
}
