use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::notify::{Notification, NotifyKind};

/// Render the notification stack in the frame's top-right corner, oldest
/// at the top. Each entry is one line with a kind-colored background.
pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &[Notification]) {
	for (index, notification) in notifications.iter().enumerate() {
		let y = area.y + 1 + index as u16;
		if y >= area.bottom() {
			break;
		}

		let text = format!(" {} {} ", glyph(notification.kind), notification.message);
		let width = (text.width() as u16).min(area.width);
		let rect = Rect {
			x: area.right().saturating_sub(width + 1),
			y,
			width,
			height: 1,
		};

		frame.render_widget(Clear, rect);
		frame.render_widget(Paragraph::new(text).style(style(notification.kind)), rect);
	}
}

fn glyph(kind: NotifyKind) -> &'static str {
	match kind {
		NotifyKind::Info => "ℹ",
		NotifyKind::Success => "✔",
		NotifyKind::Error => "✖",
		NotifyKind::Warning => "⚠",
	}
}

fn style(kind: NotifyKind) -> Style {
	let bg = match kind {
		NotifyKind::Info => Color::Rgb(59, 130, 246),
		NotifyKind::Success => Color::Rgb(16, 185, 129),
		NotifyKind::Error => Color::Rgb(239, 68, 68),
		NotifyKind::Warning => Color::Rgb(245, 158, 11),
	};
	Style::default()
		.bg(bg)
		.fg(Color::White)
		.add_modifier(Modifier::BOLD)
}
