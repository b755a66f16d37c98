use axum::{http::StatusCode, response::Json};
use serde::Serialize;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Build the (status, body) pair handlers return on failure
pub fn error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
	(status, Json(ErrorResponse::new(code, message)))
}
