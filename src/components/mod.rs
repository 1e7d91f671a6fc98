//! Widget-level rendering. Every function here is a pure projection of
//! state onto a frame region; none of them mutate application state.

mod compare;
mod history;
mod input;
mod notifications;
mod results;
mod summary;

pub use compare::render_compare_overlay;
pub use history::render_history;
pub use input::{QueryInput, render_input};
pub use notifications::render_notifications;
pub use results::{build_result_rows, render_results};
pub use summary::render_summary;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `max_width` display columns, marking cuts
/// with an ellipsis.
#[must_use]
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
	let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
	if total <= max_width {
		return text.to_string();
	}
	// Reserve one column for the ellipsis marking the cut.
	let mut width = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > max_width.saturating_sub(1) {
			break;
		}
		width += ch_width;
		out.push(ch);
	}
	out.push('…');
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_text_is_untouched() {
		assert_eq!(truncate_to_width("hi", 10), "hi");
	}

	#[test]
	fn exact_fit_text_is_untouched() {
		assert_eq!(truncate_to_width("1234567890", 10), "1234567890");
	}

	#[test]
	fn long_text_gains_an_ellipsis() {
		let truncated = truncate_to_width("a very long product title", 10);
		assert!(truncated.ends_with('…'));
		assert!(truncated.chars().count() <= 10);
	}
}
