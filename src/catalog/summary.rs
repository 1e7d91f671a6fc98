use std::collections::HashSet;

use crate::backend::ProductRecord;

/// Aggregate statistics over one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
	/// Number of distinct retailer identifiers in the set.
	pub store_count: usize,
	/// Total number of records.
	pub product_count: usize,
	/// Mean price. Records without a price contribute 0 to the sum while
	/// the divisor stays the full record count, matching the upstream
	/// service's published figures; the skew is intentional.
	pub avg_price: f64,
	/// Minimum over present prices, `None` when every price is absent.
	pub best_price: Option<f64>,
}

/// Compute summary statistics, or `None` for an empty result set.
#[must_use]
pub fn summarize(results: &[ProductRecord]) -> Option<Summary> {
	if results.is_empty() {
		return None;
	}

	let stores: HashSet<&str> = results.iter().map(|r| r.website.as_str()).collect();
	let price_sum: f64 = results.iter().filter_map(|r| r.price).sum();
	let best_price = results
		.iter()
		.filter_map(|r| r.price)
		.min_by(f64::total_cmp);

	Some(Summary {
		store_count: stores.len(),
		product_count: results.len(),
		avg_price: price_sum / results.len() as f64,
		best_price,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(website: &str, price: Option<f64>) -> ProductRecord {
		ProductRecord {
			title: "thing".to_string(),
			website: website.to_string(),
			price,
			rating: None,
			image: None,
			link: format!("https://{website}/thing/{price:?}"),
		}
	}

	#[test]
	fn averages_over_full_count_with_absent_as_zero() {
		let summary = summarize(&[
			record("Amazon", Some(100.0)),
			record("Daraz", Some(200.0)),
			record("PriceOye", None),
		])
		.unwrap();

		assert_eq!(summary.product_count, 3);
		assert_eq!(summary.store_count, 3);
		assert_eq!(summary.avg_price, 100.0);
		assert_eq!(summary.best_price, Some(100.0));
	}

	#[test]
	fn counts_distinct_stores_once() {
		let summary = summarize(&[
			record("Amazon", Some(10.0)),
			record("Amazon", Some(20.0)),
		])
		.unwrap();
		assert_eq!(summary.store_count, 1);
		assert_eq!(summary.product_count, 2);
	}

	#[test]
	fn all_prices_absent_has_no_best_price() {
		let summary = summarize(&[record("Amazon", None), record("Daraz", None)]).unwrap();
		assert_eq!(summary.best_price, None);
		assert_eq!(summary.avg_price, 0.0);
	}

	#[test]
	fn empty_set_is_undefined() {
		assert!(summarize(&[]).is_none());
	}
}
