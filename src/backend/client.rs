use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::error::BackendError;
use super::types::{HistoryEntry, SearchRequest, SearchResponse, SearchResults};

/// Blocking HTTP client for the shopscout backend.
///
/// All calls run on the request worker thread (see `app::search`), never
/// on the UI thread, so blocking I/O keeps the code simple without
/// freezing the interface.
#[derive(Debug, Clone)]
pub struct BackendClient {
	http: Client,
	base_url: String,
}

impl BackendClient {
	/// Build a client for `base_url` with the given request timeout.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
		let http = Client::builder().timeout(timeout).build()?;
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Ok(Self { http, base_url })
	}

	/// `POST /search` with the product text and checked website ids.
	///
	/// A `success: false` envelope becomes [`BackendError::Rejected`]
	/// carrying the backend's message when it sent one.
	pub fn search(
		&self,
		product: &str,
		websites: &[String],
	) -> Result<SearchResults, BackendError> {
		let request = SearchRequest {
			product: product.to_string(),
			websites: websites.to_vec(),
		};
		debug!(product, websites = ?request.websites, "issuing search");

		let response = self
			.http
			.post(format!("{}/search", self.base_url))
			.json(&request)
			.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(BackendError::Status(status));
		}

		let body = response.text()?;
		let parsed: SearchResponse = serde_json::from_str(&body)?;
		if !parsed.success {
			let message = parsed
				.error
				.unwrap_or_else(|| "Search failed".to_string());
			return Err(BackendError::Rejected(message));
		}
		Ok(SearchResults {
			records: parsed.results,
			count: parsed.count,
		})
	}

	/// `GET /history`, returned in backend order.
	pub fn history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
		let response = self
			.http
			.get(format!("{}/history", self.base_url))
			.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(BackendError::Status(status));
		}

		let body = response.text()?;
		let entries: Vec<HistoryEntry> = serde_json::from_str(&body)?;
		Ok(entries)
	}

	/// `GET /download/{filename}`, writing the body under `target_dir`.
	///
	/// The filename is passed through untouched; the backend owns its
	/// meaning. Returns the path the file was written to.
	pub fn download(&self, filename: &str, target_dir: &Path) -> Result<PathBuf, BackendError> {
		let response = self
			.http
			.get(format!("{}/download/{filename}", self.base_url))
			.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(BackendError::Status(status));
		}

		fs::create_dir_all(target_dir)?;
		let target = target_dir.join(filename);
		fs::write(&target, response.bytes()?)?;
		debug!(path = %target.display(), "history download written");
		Ok(target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_slashes_are_stripped_from_the_base_url() {
		let client = BackendClient::new("http://localhost:5000///", Duration::from_secs(5)).unwrap();
		assert_eq!(client.base_url, "http://localhost:5000");
	}
}
