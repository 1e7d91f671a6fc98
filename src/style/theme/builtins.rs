use ratatui::style::{Color, Modifier, Style};

use super::types::Theme;

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(199, 210, 254))
		.fg(Color::Rgb(30, 27, 75)),
	prompt: Style::new().fg(Color::Rgb(79, 70, 229)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(5, 150, 105))
		.add_modifier(Modifier::BOLD),
	badge: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(16, 185, 129))
		.add_modifier(Modifier::BOLD),
	stars: Style::new().fg(Color::Rgb(217, 119, 6)),
	disabled: Style::new().fg(Color::Rgb(148, 163, 184)),
};

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(224, 231, 255)),
	prompt: Style::new().fg(Color::Rgb(129, 140, 248)),
	empty: Style::new().fg(Color::Rgb(148, 163, 184)),
	highlight: Style::new()
		.fg(Color::Rgb(52, 211, 153))
		.add_modifier(Modifier::BOLD),
	badge: Style::new()
		.fg(Color::Rgb(2, 44, 34))
		.bg(Color::Rgb(52, 211, 153))
		.add_modifier(Modifier::BOLD),
	stars: Style::new().fg(Color::Rgb(251, 191, 36)),
	disabled: Style::new().fg(Color::Rgb(71, 85, 105)),
};
