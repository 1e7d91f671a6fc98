use thiserror::Error;

/// Failures raised at the backend boundary.
///
/// Every variant is recovered inside the orchestrator and surfaced as a
/// notification; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum BackendError {
	/// Transport-level failure: connection refused, timeout, TLS, etc.
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The endpoint answered with a non-success HTTP status.
	#[error("backend returned status {0}")]
	Status(reqwest::StatusCode),

	/// The response body did not match the expected shape.
	#[error("malformed response: {0}")]
	Malformed(#[from] serde_json::Error),

	/// The backend processed the request but reported `success: false`.
	#[error("{0}")]
	Rejected(String),

	/// A downloaded file could not be written locally.
	#[error("could not write download: {0}")]
	Io(#[from] std::io::Error),
}

impl BackendError {
	/// Message shown to the user, preferring backend-supplied text and
	/// falling back to a generic line for transport-level noise.
	#[must_use]
	pub fn user_message(&self) -> String {
		match self {
			Self::Rejected(message) => message.clone(),
			_ => "Failed to search products".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejection_keeps_the_backend_message() {
		let err = BackendError::Rejected("scraper quota exceeded".to_string());
		assert_eq!(err.user_message(), "scraper quota exceeded");
	}

	#[test]
	fn transport_errors_use_the_generic_fallback() {
		let err = BackendError::Status(reqwest::StatusCode::BAD_GATEWAY);
		assert_eq!(err.user_message(), "Failed to search products");
	}
}
