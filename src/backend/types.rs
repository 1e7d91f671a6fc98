use serde::{Deserialize, Serialize};

/// One normalized product offer as returned by the search endpoint.
///
/// `link` is the identity key: two records describe the same product
/// exactly when their links are equal, and links are unique within one
/// response. Prices are never negative; ratings are whatever string the
/// retailer page carried and may not parse.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRecord {
	pub title: String,
	pub website: String,
	#[serde(default)]
	pub price: Option<f64>,
	#[serde(default)]
	pub rating: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	pub link: String,
}

impl ProductRecord {
	/// Numeric rating with missing or unparseable values coerced to 0.
	#[must_use]
	pub fn rating_value(&self) -> f64 {
		self.rating
			.as_deref()
			.and_then(|r| r.trim().parse().ok())
			.unwrap_or(0.0)
	}
}

/// Request body for `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
	pub product: String,
	pub websites: Vec<String>,
}

/// Response envelope from `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
	pub success: bool,
	#[serde(default)]
	pub results: Vec<ProductRecord>,
	#[serde(default)]
	pub count: usize,
	#[serde(default)]
	pub error: Option<String>,
}

/// Successful search payload handed to the UI: the records plus the
/// backend's own result count, which the success message reports
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
	pub records: Vec<ProductRecord>,
	pub count: usize,
}

/// One past search session from `GET /history`.
///
/// The list arrives in backend-defined order and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
	/// Fixed-format datetime, `YYYYMMDD_HHMMSS`.
	pub timestamp: String,
	pub count: usize,
	pub filename: String,
}

impl HistoryEntry {
	/// Parse the fixed-format timestamp into a local date/time for display.
	#[must_use]
	pub fn local_time(&self) -> Option<chrono::NaiveDateTime> {
		chrono::NaiveDateTime::parse_from_str(&self.timestamp, "%Y%m%d_%H%M%S").ok()
	}

	/// Human-readable timestamp, falling back to the raw string when the
	/// backend sends something unexpected.
	#[must_use]
	pub fn display_time(&self) -> String {
		match self.local_time() {
			Some(when) => when.format("%d/%m/%Y, %H:%M:%S").to_string(),
			None => self.timestamp.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_a_search_response() {
		let payload = r#"{
			"success": true,
			"results": [
				{
					"title": "Phone X",
					"website": "Daraz",
					"price": 999.0,
					"rating": "4.5",
					"image": "https://img.example/p.jpg",
					"link": "https://daraz.pk/p/1"
				},
				{
					"title": "Phone Y",
					"website": "Amazon",
					"link": "https://amazon.com/p/2"
				}
			],
			"count": 2
		}"#;

		let response: SearchResponse = serde_json::from_str(payload).unwrap();
		assert!(response.success);
		assert_eq!(response.count, 2);
		assert_eq!(response.results.len(), 2);
		assert_eq!(response.results[1].price, None);
		assert_eq!(response.results[1].rating, None);
	}

	#[test]
	fn parses_a_rejection() {
		let payload = r#"{"success": false, "error": "no scrapers available"}"#;
		let response: SearchResponse = serde_json::from_str(payload).unwrap();
		assert!(!response.success);
		assert_eq!(response.error.as_deref(), Some("no scrapers available"));
		assert!(response.results.is_empty());
	}

	#[test]
	fn rating_value_coerces_garbage_to_zero() {
		let record = ProductRecord {
			title: String::new(),
			website: String::new(),
			price: None,
			rating: Some("four point five".to_string()),
			image: None,
			link: "https://example".to_string(),
		};
		assert_eq!(record.rating_value(), 0.0);
	}

	#[test]
	fn history_timestamp_parses_to_local_time() {
		let entry = HistoryEntry {
			timestamp: "20240115_143000".to_string(),
			count: 12,
			filename: "search_20240115_143000.json".to_string(),
		};
		let when = entry.local_time().unwrap();
		assert_eq!(
			when,
			chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
				.unwrap()
				.and_hms_opt(14, 30, 0)
				.unwrap()
		);
		assert_eq!(entry.display_time(), "15/01/2024, 14:30:00");
	}

	#[test]
	fn malformed_history_timestamp_falls_back_to_raw() {
		let entry = HistoryEntry {
			timestamp: "yesterday".to_string(),
			count: 0,
			filename: "x.json".to_string(),
		};
		assert_eq!(entry.local_time(), None);
		assert_eq!(entry.display_time(), "yesterday");
	}
}
