use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const PROMPT: &str = "Search ❯ ";

/// Single-line text input for the product query.
#[derive(Debug, Default)]
pub struct QueryInput {
	text: String,
	/// Cursor position in characters.
	cursor: usize,
}

impl QueryInput {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let text = initial.into();
		let cursor = text.chars().count();
		Self { text, cursor }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Apply a key event, returning whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char(c)
				if !key.modifiers.contains(KeyModifiers::CONTROL)
					&& !key.modifiers.contains(KeyModifiers::ALT) =>
			{
				let byte = self.byte_offset(self.cursor);
				self.text.insert(byte, c);
				self.cursor += 1;
				true
			}
			KeyCode::Backspace if self.cursor > 0 => {
				let byte = self.byte_offset(self.cursor - 1);
				self.text.remove(byte);
				self.cursor -= 1;
				true
			}
			KeyCode::Delete if self.cursor < self.text.chars().count() => {
				let byte = self.byte_offset(self.cursor);
				self.text.remove(byte);
				true
			}
			KeyCode::Left => {
				self.cursor = self.cursor.saturating_sub(1);
				false
			}
			KeyCode::Right => {
				self.cursor = (self.cursor + 1).min(self.text.chars().count());
				false
			}
			KeyCode::Home => {
				self.cursor = 0;
				false
			}
			KeyCode::End => {
				self.cursor = self.text.chars().count();
				false
			}
			_ => false,
		}
	}

	fn byte_offset(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map_or(self.text.len(), |(offset, _)| offset)
	}
}

/// Render the query prompt and place the terminal cursor inside it.
pub fn render_input(
	frame: &mut Frame,
	area: Rect,
	input: &QueryInput,
	placeholder: &str,
	theme: &Theme,
) {
	let line = if input.text().is_empty() {
		Line::from(vec![
			Span::styled(PROMPT, theme.prompt),
			Span::styled(placeholder.to_string(), theme.empty),
		])
	} else {
		Line::from(vec![
			Span::styled(PROMPT, theme.prompt),
			Span::raw(input.text().to_string()),
		])
	};
	frame.render_widget(Paragraph::new(line), area);

	let prefix: String = input.text().chars().take(input.cursor).collect();
	let cursor_x = area.x + PROMPT.width() as u16 + prefix.width() as u16;
	frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_at_the_cursor() {
		let mut input = QueryInput::default();
		for c in "phone".chars() {
			assert!(input.input(press(KeyCode::Char(c))));
		}
		assert_eq!(input.text(), "phone");
	}

	#[test]
	fn backspace_removes_before_the_cursor() {
		let mut input = QueryInput::new("phone");
		input.input(press(KeyCode::Backspace));
		assert_eq!(input.text(), "phon");

		input.input(press(KeyCode::Home));
		assert!(!input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "phon");
	}

	#[test]
	fn editing_mid_string_respects_character_boundaries() {
		let mut input = QueryInput::new("héllo");
		input.input(press(KeyCode::Left));
		input.input(press(KeyCode::Left));
		input.input(press(KeyCode::Char('x')));
		assert_eq!(input.text(), "hélxlo");
	}
}
