use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use super::App;
use crate::catalog::MAX_COMPARE;
use crate::components::{
	render_compare_overlay, render_history, render_input, render_notifications,
	render_results, render_summary,
};

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let theme = self.theme();
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let summary_height = if self.summary.is_some() { 3 } else { 0 };
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1), // header
				Constraint::Length(1), // query input
				Constraint::Length(1), // websites + sort
				Constraint::Length(summary_height),
				Constraint::Min(5),    // results
				Constraint::Length(6), // history
				Constraint::Length(1), // key hints
			])
			.split(area);

		self.render_header(frame, layout[0]);
		render_input(frame, layout[1], &self.query, "Type a product name…", &theme);
		self.render_filters(frame, layout[2]);
		if let Some(summary) = &self.summary {
			render_summary(frame, layout[3], summary, &theme);
		}
		render_results(
			frame,
			layout[4],
			&self.results,
			&self.selection,
			&mut self.table_state,
			&theme,
		);
		render_history(frame, layout[5], &self.history, &theme);
		self.render_hints(frame, layout[6]);

		if self.loading() {
			self.render_loading(frame, layout[4]);
		}

		if self.compare_open {
			let products = self.selected_records();
			render_compare_overlay(frame, area, &products, &theme);
		}

		if !self.notifications.is_empty() {
			render_notifications(frame, area, self.notifications.visible());
		}
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let theme = self.theme();
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Fill(1), Constraint::Fill(1)])
			.split(area);

		let title = Paragraph::new(Line::styled("shopscout — price comparison", theme.header));
		frame.render_widget(title, columns[0]);

		let compare_style = if self.selection.can_compare() {
			theme.highlight
		} else {
			theme.disabled
		};
		let status = Line::from(vec![
			Span::styled(
				format!("Selected: {}/{MAX_COMPARE}", self.selection.len()),
				theme.prompt,
			),
			Span::raw("  "),
			Span::styled("Compare (Ctrl+O)", compare_style),
			Span::raw("  "),
			Span::styled(
				format!("{} theme", self.theme_preference.indicator()),
				theme.prompt,
			),
		]);
		frame.render_widget(
			Paragraph::new(status).alignment(Alignment::Right),
			columns[1],
		);
	}

	fn render_filters(&self, frame: &mut Frame, area: Rect) {
		let theme = self.theme();
		let mut spans = vec![Span::styled("Websites: ", theme.prompt)];
		for (index, website) in self.websites.iter().enumerate() {
			let mark = if website.checked { "[x]" } else { "[ ]" };
			let style = if website.checked {
				theme.highlight
			} else {
				theme.empty
			};
			spans.push(Span::styled(
				format!("{mark} {} (Alt+{}) ", website.label, index + 1),
				style,
			));
		}
		spans.push(Span::raw("  "));
		spans.push(Span::styled(
			format!("Sort: {} (Ctrl+S)", self.sort_mode.label()),
			theme.prompt,
		));
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}

	fn render_loading(&mut self, frame: &mut Frame, area: Rect) {
		let throbber = Throbber::default()
			.label("Searching retailers…")
			.style(self.theme().highlight);
		let row = Rect {
			x: area.x + 2,
			y: area.y + 1,
			width: area.width.saturating_sub(4).min(30),
			height: 1,
		};
		frame.render_stateful_widget(throbber, row, &mut self.throbber_state);
	}

	fn render_hints(&self, frame: &mut Frame, area: Rect) {
		let hints = Paragraph::new(Line::styled(
			"Enter search · ↑/↓ move · Tab select · Ctrl+O compare · Ctrl+S sort · Ctrl+T theme · Ctrl+D download · Ctrl+R history · Esc quit",
			self.theme().empty,
		));
		frame.render_widget(hints, area);
	}
}
