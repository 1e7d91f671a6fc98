use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use super::truncate_to_width;
use crate::backend::ProductRecord;
use crate::catalog::{format_price, star_glyphs};
use crate::style::Theme;

/// Render the comparison overlay: a centered modal table with one column
/// per selected product, in selection order. Callers guarantee at least
/// two products.
pub fn render_compare_overlay(
	frame: &mut Frame,
	area: Rect,
	products: &[&ProductRecord],
	theme: &Theme,
) {
	let overlay = centered_rect(area, 86, 60);
	frame.render_widget(Clear, overlay);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.prompt)
		.title("Product Comparison")
		.title_bottom("Esc closes");
	let inner = block.inner(overlay);
	frame.render_widget(block, overlay);

	let column_width = usize::from(inner.width)
		.saturating_sub(10)
		.checked_div(products.len())
		.unwrap_or(12)
		.max(8);

	let mut header_cells = vec![Cell::from("Feature")];
	header_cells.extend(
		products
			.iter()
			.map(|p| Cell::from(truncate_to_width(&p.website, column_width))),
	);
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let feature_rows = [
		(
			"Product",
			products
				.iter()
				.map(|p| truncate_to_width(&p.title, column_width))
				.collect::<Vec<_>>(),
		),
		(
			"Price",
			products.iter().map(|p| format_price(p.price)).collect(),
		),
		(
			"Rating",
			products
				.iter()
				.map(|p| match star_glyphs(p.rating.as_deref()) {
					glyphs if glyphs.is_empty() => "N/A".to_string(),
					glyphs => format!("{} {}", glyphs, p.rating.as_deref().unwrap_or_default()),
				})
				.collect(),
		),
		(
			"Link",
			products
				.iter()
				.map(|p| truncate_to_width(&p.link, column_width))
				.collect(),
		),
	];

	let rows: Vec<Row> = feature_rows
		.into_iter()
		.map(|(feature, values)| {
			let mut cells = vec![Cell::from(feature).style(theme.header)];
			cells.extend(values.into_iter().map(Cell::from));
			Row::new(cells).height(1).bottom_margin(1)
		})
		.collect();

	let mut widths = vec![Constraint::Length(8)];
	widths.extend(std::iter::repeat_n(Constraint::Fill(1), products.len()));

	let table = Table::new(rows, widths).header(header).column_spacing(2);
	frame.render_widget(table, inner);
}

/// A rectangle of `percent_x` by `percent_y` of `area`, centered.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	// Widen before multiplying: u16 arithmetic overflows past ~762 columns.
	let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
	let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
	Rect {
		x: area.x + (area.width.saturating_sub(width)) / 2,
		y: area.y + (area.height.saturating_sub(height)) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_rect_stays_inside_the_area() {
		let area = Rect::new(0, 0, 100, 40);
		let overlay = centered_rect(area, 86, 60);
		assert!(overlay.x >= area.x && overlay.right() <= area.right());
		assert!(overlay.y >= area.y && overlay.bottom() <= area.bottom());
		assert_eq!(overlay.width, 86);
		assert_eq!(overlay.height, 24);
	}

	#[test]
	fn centered_rect_handles_wide_terminals() {
		let area = Rect::new(0, 0, 800, 40);
		let overlay = centered_rect(area, 86, 60);
		assert_eq!(overlay.width, 688);
		assert_eq!(overlay.height, 24);
		assert!(overlay.x >= area.x && overlay.right() <= area.right());
	}
}
