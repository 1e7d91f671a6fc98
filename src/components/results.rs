use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};

use super::truncate_to_width;
use crate::backend::ProductRecord;
use crate::catalog::{SelectionSet, format_price, star_glyphs};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Column layout for the result table.
fn column_widths() -> Vec<Constraint> {
	vec![
		Constraint::Length(3),  // selection checkbox
		Constraint::Fill(2),    // title (+ badge)
		Constraint::Length(10), // website
		Constraint::Length(12), // price
		Constraint::Length(11), // stars + value
		Constraint::Fill(1),    // link
	]
}

/// Build table rows from the sorted result set.
///
/// Row 0 carries the "Best Price" badge: a presentation label that
/// follows sort order, not a recomputed minimum. Checkbox cells mirror
/// selection membership exactly.
#[must_use]
pub fn build_result_rows<'a>(
	results: &'a [ProductRecord],
	selection: &SelectionSet,
	theme: &Theme,
	title_width: usize,
) -> Vec<Row<'a>> {
	results
		.iter()
		.enumerate()
		.map(|(index, record)| {
			let selected = selection.contains(&record.link);
			let checkbox = if selected { CHECKED } else { UNCHECKED };

			let mut title_spans = vec![Span::raw(truncate_to_width(
				&record.title,
				title_width.max(8),
			))];
			if index == 0 {
				title_spans.push(Span::raw(" "));
				title_spans.push(Span::styled(" Best Price ", theme.badge));
			}

			let rating_cell = match star_glyphs(record.rating.as_deref()) {
				glyphs if glyphs.is_empty() => Cell::from("N/A"),
				glyphs => Cell::from(Line::from(vec![
					Span::styled(glyphs, theme.stars),
					Span::raw(format!(
						" {}",
						record.rating.as_deref().unwrap_or_default()
					)),
				])),
			};

			Row::new(vec![
				Cell::from(if selected {
					Span::styled(checkbox, theme.highlight)
				} else {
					Span::raw(checkbox)
				}),
				Cell::from(Line::from(title_spans)),
				Cell::from(record.website.as_str()),
				Cell::from(Span::styled(
					format_price(record.price),
					theme.highlight,
				)),
				rating_cell,
				Cell::from(truncate_to_width(&record.link, 40)),
			])
		})
		.collect()
}

/// Render the result table, or the empty-state placeholder when the set
/// is empty. The pane title carries the result counter only when there
/// are results.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	results: &[ProductRecord],
	selection: &SelectionSet,
	table_state: &mut TableState,
	theme: &Theme,
) {
	let title = if results.is_empty() {
		"Results".to_string()
	} else {
		format!("Results ({})", results.len())
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style(theme))
		.title(title);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if results.is_empty() {
		let placeholder = Paragraph::new(vec![
			Line::from("No products found"),
			Line::from("Try searching for something else"),
		])
		.style(theme.empty)
		.alignment(Alignment::Center);
		let centered = vertical_center(inner, 2);
		frame.render_widget(placeholder, centered);
		return;
	}

	// Leave slack for the highlight symbol so the title column does not
	// push the link column off screen.
	let title_width = (inner.width as usize / 3).saturating_sub(2);
	let rows = build_result_rows(results, selection, theme, title_width);

	let header = Row::new(["", "Title", "Website", "Price", "Rating", "Link"])
		.style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)))
		.height(1)
		.bottom_margin(1);

	let table = Table::new(rows, column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);
}

fn border_style(theme: &Theme) -> Style {
	Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset))
}

fn vertical_center(area: Rect, content_height: u16) -> Rect {
	let offset = area.height.saturating_sub(content_height) / 2;
	Rect {
		x: area.x,
		y: area.y + offset,
		width: area.width,
		height: content_height.min(area.height),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(link: &str, title: &str) -> ProductRecord {
		ProductRecord {
			title: title.to_string(),
			website: "Daraz".to_string(),
			price: Some(1500.0),
			rating: Some("4.5".to_string()),
			image: None,
			link: link.to_string(),
		}
	}

	#[test]
	fn one_row_per_record() {
		let results = vec![record("https://a", "A"), record("https://b", "B")];
		let selection = SelectionSet::default();
		let rows = build_result_rows(&results, &selection, &Theme::default(), 20);
		assert_eq!(rows.len(), 2);
	}

	#[test]
	fn empty_results_build_no_rows() {
		let rows = build_result_rows(&[], &SelectionSet::default(), &Theme::default(), 20);
		assert!(rows.is_empty());
	}

	#[test]
	fn missing_rating_shows_not_available() {
		let mut unrated = record("https://a", "A");
		unrated.rating = None;
		let results = vec![unrated];
		let selection = SelectionSet::default();
		let mut table_state = TableState::default();

		let backend = ratatui::backend::TestBackend::new(80, 10);
		let mut terminal = ratatui::Terminal::new(backend).unwrap();
		terminal
			.draw(|frame| {
				render_results(
					frame,
					frame.area(),
					&results,
					&selection,
					&mut table_state,
					&Theme::default(),
				);
			})
			.unwrap();

		let rendered: String = terminal
			.backend()
			.buffer()
			.content()
			.iter()
			.map(ratatui::buffer::Cell::symbol)
			.collect();
		assert!(rendered.contains("N/A"));
	}
}
