use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::{Summary, format_price};
use crate::style::Theme;

/// Render the four summary cards: store count, product count, average
/// price, and best price. Callers skip this entirely when there is no
/// summary (empty result set).
pub fn render_summary(frame: &mut Frame, area: Rect, summary: &Summary, theme: &Theme) {
	let cards = [
		("Stores", summary.store_count.to_string()),
		("Products", summary.product_count.to_string()),
		("Avg Price", format_price(Some(summary.avg_price))),
		("Best Price", format_price(summary.best_price)),
	];

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Ratio(1, 4); 4])
		.split(area);

	for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.title(label);
		let inner = block.inner(*column);
		frame.render_widget(block, *column);
		let value_line = Paragraph::new(Line::styled(value, theme.highlight))
			.alignment(Alignment::Center);
		frame.render_widget(value_line, inner);
	}
}
