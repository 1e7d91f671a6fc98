const FULL_STAR: char = '★';
const HALF_STAR: char = '⯨';
const EMPTY_STAR: char = '☆';

/// Star-glyph breakdown of a product rating.
///
/// Ratings arrive as free-form strings from the scrapers, so anything
/// that does not parse to a number renders as no stars at all rather
/// than five empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
	pub full: usize,
	pub half: usize,
	pub empty: usize,
}

impl StarRating {
	/// Split a rating value into full, half, and empty stars.
	///
	/// `full + half + empty == 5` always holds; a fractional part of at
	/// least 0.5 earns the single half star.
	#[must_use]
	pub fn from_value(rating: f64) -> Self {
		let rating = rating.clamp(0.0, 5.0);
		let full = rating.floor() as usize;
		let half = usize::from(rating.fract() >= 0.5);
		Self {
			full,
			half,
			empty: 5 - full - half,
		}
	}

	/// Parse a rating string and split it, or `None` when the rating is
	/// absent or not numeric.
	#[must_use]
	pub fn parse(rating: Option<&str>) -> Option<Self> {
		let value: f64 = rating?.trim().parse().ok()?;
		Some(Self::from_value(value.clamp(0.0, 5.0)))
	}

	/// Render the stars as a glyph string.
	#[must_use]
	pub fn glyphs(&self) -> String {
		let mut out = String::with_capacity(5 * FULL_STAR.len_utf8());
		out.extend(std::iter::repeat_n(FULL_STAR, self.full));
		out.extend(std::iter::repeat_n(HALF_STAR, self.half));
		out.extend(std::iter::repeat_n(EMPTY_STAR, self.empty));
		out
	}
}

/// Glyph string for a raw rating field, empty when nothing should render.
#[must_use]
pub fn star_glyphs(rating: Option<&str>) -> String {
	StarRating::parse(rating)
		.map(|stars| stars.glyphs())
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn four_and_a_half_stars() {
		let stars = StarRating::parse(Some("4.5")).unwrap();
		assert_eq!(stars, StarRating { full: 4, half: 1, empty: 0 });
	}

	#[test]
	fn whole_rating_has_no_half_star() {
		let stars = StarRating::parse(Some("3")).unwrap();
		assert_eq!(stars, StarRating { full: 3, half: 0, empty: 2 });
	}

	#[test]
	fn fraction_below_half_rounds_down() {
		let stars = StarRating::from_value(2.4);
		assert_eq!(stars, StarRating { full: 2, half: 0, empty: 3 });
	}

	#[test]
	fn absent_and_garbage_render_nothing() {
		assert_eq!(StarRating::parse(None), None);
		assert_eq!(StarRating::parse(Some("N/A")), None);
		assert_eq!(star_glyphs(Some("not a rating")), "");
	}

	#[test]
	fn breakdown_always_totals_five() {
		for tenths in 0..=50 {
			let stars = StarRating::from_value(f64::from(tenths) / 10.0);
			assert_eq!(stars.full + stars.half + stars.empty, 5);
		}
	}

	#[test]
	fn glyph_string_matches_breakdown() {
		assert_eq!(star_glyphs(Some("4.5")), "★★★★⯨");
		assert_eq!(star_glyphs(Some("3")), "★★★☆☆");
	}
}
