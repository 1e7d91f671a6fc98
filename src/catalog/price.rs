/// Format a price for display: `Rs. ` followed by the thousands-grouped
/// integer part, or `N/A` when the price is unknown.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
	match price {
		Some(value) => format!("Rs. {}", group_thousands(value.round() as i64)),
		None => "N/A".to_string(),
	}
}

fn group_thousands(value: i64) -> String {
	let digits = value.abs().to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if value < 0 {
		grouped.push('-');
	}
	let offset = digits.len() % 3;
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (i + 3 - offset) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_thousands() {
		assert_eq!(format_price(Some(1_234_567.0)), "Rs. 1,234,567");
		assert_eq!(format_price(Some(999.0)), "Rs. 999");
		assert_eq!(format_price(Some(1_000.0)), "Rs. 1,000");
	}

	#[test]
	fn rounds_fractional_prices() {
		assert_eq!(format_price(Some(1549.5)), "Rs. 1,550");
	}

	#[test]
	fn absent_price_is_not_available() {
		assert_eq!(format_price(None), "N/A");
	}

	#[test]
	fn zero_is_plain() {
		assert_eq!(format_price(Some(0.0)), "Rs. 0");
	}
}
