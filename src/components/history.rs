use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::backend::HistoryEntry;
use crate::style::Theme;

/// Render the history pane: one line per past search, backend order
/// preserved, with an empty-state placeholder when there is none.
pub fn render_history(frame: &mut Frame, area: Rect, history: &[HistoryEntry], theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.title("Search History");
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if history.is_empty() {
		let placeholder = Paragraph::new(vec![
			Line::from("No search history"),
			Line::from("Your recent searches will appear here"),
		])
		.style(theme.empty)
		.alignment(Alignment::Center);
		frame.render_widget(placeholder, inner);
		return;
	}

	let lines: Vec<Line> = history
		.iter()
		.take(inner.height as usize)
		.map(|entry| {
			Line::from(vec![
				Span::styled(entry.display_time(), theme.prompt),
				Span::raw("  "),
				Span::styled(
					format!("{} products found", entry.count),
					theme.highlight,
				),
				Span::raw("  "),
				Span::styled(entry.filename.clone(), theme.empty),
			])
		})
		.collect();

	frame.render_widget(Paragraph::new(lines), inner);
}
