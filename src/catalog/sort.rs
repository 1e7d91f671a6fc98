use crate::backend::ProductRecord;

/// Comparator strategy applied to a result set.
///
/// Exactly one mode is active at a time; the UI cycles through them in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
	/// Cheapest first. Records without a price sort last.
	#[default]
	PriceAscending,
	/// Most expensive first. Records without a price sort last.
	PriceDescending,
	/// Highest rated first. Missing or unparseable ratings count as 0.
	RatingDescending,
}

impl SortMode {
	/// Advance to the next mode, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Self::PriceAscending => Self::PriceDescending,
			Self::PriceDescending => Self::RatingDescending,
			Self::RatingDescending => Self::PriceAscending,
		}
	}

	/// Label shown in the sort indicator.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::PriceAscending => "Price: Low to High",
			Self::PriceDescending => "Price: High to Low",
			Self::RatingDescending => "Rating",
		}
	}
}

/// Return a new ordering of `results` under `mode`, leaving the input
/// untouched.
///
/// The sort is stable: records comparing equal keep their relative input
/// order, which matters for the "Best Price" badge on ties.
#[must_use]
pub fn sort_results(results: &[ProductRecord], mode: SortMode) -> Vec<ProductRecord> {
	let mut sorted = results.to_vec();
	match mode {
		SortMode::PriceAscending => {
			sorted.sort_by(|a, b| {
				let a = a.price.unwrap_or(f64::INFINITY);
				let b = b.price.unwrap_or(f64::INFINITY);
				a.total_cmp(&b)
			});
		}
		SortMode::PriceDescending => {
			sorted.sort_by(|a, b| {
				let a = a.price.unwrap_or(0.0);
				let b = b.price.unwrap_or(0.0);
				b.total_cmp(&a)
			});
		}
		SortMode::RatingDescending => {
			sorted.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
		}
	}
	sorted
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(link: &str, price: Option<f64>, rating: Option<&str>) -> ProductRecord {
		ProductRecord {
			title: format!("product {link}"),
			website: "Amazon".to_string(),
			price,
			rating: rating.map(str::to_string),
			image: None,
			link: link.to_string(),
		}
	}

	fn links(results: &[ProductRecord]) -> Vec<&str> {
		results.iter().map(|r| r.link.as_str()).collect()
	}

	#[test]
	fn price_ascending_puts_missing_prices_last() {
		let input = [
			record("a", None, None),
			record("b", Some(200.0), None),
			record("c", Some(100.0), None),
		];
		let sorted = sort_results(&input, SortMode::PriceAscending);
		assert_eq!(links(&sorted), vec!["c", "b", "a"]);
	}

	#[test]
	fn price_descending_puts_missing_prices_last() {
		let input = [
			record("a", None, None),
			record("b", Some(200.0), None),
			record("c", Some(100.0), None),
		];
		let sorted = sort_results(&input, SortMode::PriceDescending);
		assert_eq!(links(&sorted), vec!["b", "c", "a"]);
	}

	#[test]
	fn rating_descending_treats_garbage_as_zero() {
		let input = [
			record("a", None, Some("not a number")),
			record("b", None, Some("4.5")),
			record("c", None, Some("3")),
		];
		let sorted = sort_results(&input, SortMode::RatingDescending);
		assert_eq!(links(&sorted), vec!["b", "c", "a"]);
	}

	#[test]
	fn sorting_is_a_permutation_of_the_input() {
		let input = [
			record("a", Some(5.0), Some("1")),
			record("b", None, None),
			record("c", Some(5.0), Some("1")),
			record("d", Some(2.0), Some("4")),
		];
		for mode in [
			SortMode::PriceAscending,
			SortMode::PriceDescending,
			SortMode::RatingDescending,
		] {
			let sorted = sort_results(&input, mode);
			let mut before = links(&input);
			let mut after = links(&sorted);
			before.sort_unstable();
			after.sort_unstable();
			assert_eq!(before, after, "{mode:?} lost or duplicated records");
		}
	}

	#[test]
	fn equal_keys_preserve_input_order() {
		let input = [
			record("first", Some(100.0), Some("4")),
			record("second", Some(100.0), Some("4")),
			record("third", Some(100.0), Some("4")),
		];
		let sorted = sort_results(&input, SortMode::RatingDescending);
		assert_eq!(links(&sorted), vec!["first", "second", "third"]);
	}

	#[test]
	fn empty_input_yields_empty_output() {
		assert!(sort_results(&[], SortMode::PriceAscending).is_empty());
	}
}
