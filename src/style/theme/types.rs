use ratatui::style::Style;

/// A theme containing styles for the various UI surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for pane titles and table headers.
	pub header: Style,
	/// Style for the highlighted result row.
	pub row_highlight: Style,
	/// Style for the query prompt.
	pub prompt: Style,
	/// Style for empty-state placeholders.
	pub empty: Style,
	/// Style for emphasized values (prices, counts).
	pub highlight: Style,
	/// Style for the "Best Price" badge.
	pub badge: Style,
	/// Style for star-rating glyphs.
	pub stars: Style,
	/// Style for dimmed, unavailable actions.
	pub disabled: Style,
}
