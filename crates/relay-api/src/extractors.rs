//! Request extractors with gateway-format rejections

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::handlers::common::{error, ErrorResponse};

/// JSON body extractor that rejects in the gateway's error format
///
/// Axum's default `Json` rejection is a plain-text 422; a missing or
/// type-invalid field must surface as a 400 VALIDATION_ERROR with the
/// structured body, like every other validation failure.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = (StatusCode, axum::Json<ErrorResponse>);

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		match axum::Json::<T>::from_request(req, state).await {
			Ok(axum::Json(value)) => Ok(Self(value)),
			Err(rejection) => Err(error(
				StatusCode::BAD_REQUEST,
				"VALIDATION_ERROR",
				rejection.body_text(),
			)),
		}
	}
}
