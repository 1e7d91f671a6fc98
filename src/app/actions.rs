use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
	/// Process a keyboard event. Returns `true` when the app should exit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		// Esc always works: it closes the overlay first, then quits.
		if key.code == KeyCode::Esc {
			if self.compare_open {
				self.close_compare();
				return false;
			}
			return true;
		}

		// The comparison overlay is modal; everything else waits.
		if self.compare_open {
			return false;
		}

		// A search in flight suppresses interaction, like the loading
		// overlay on the page.
		if self.loading() {
			return false;
		}

		match key.code {
			KeyCode::Enter => {
				self.submit_search();
			}
			KeyCode::Tab => {
				self.toggle_selection();
			}
			KeyCode::Up => {
				self.move_cursor_up();
			}
			KeyCode::Down => {
				self.move_cursor_down();
			}
			KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.open_compare();
			}
			KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.cycle_sort();
			}
			KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.toggle_theme();
			}
			KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.download_latest_history();
			}
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.refresh_history();
			}
			KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
				let index = c as usize - '1' as usize;
				self.toggle_website(index);
			}
			_ => {
				self.query.input(key);
			}
		}
		false
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use crate::app::{App, BackendRuntime};
	use crate::backend::BackendClient;
	use crate::settings::{ResolvedConfig, Website};
	use crate::style::ThemePreference;

	fn app() -> App {
		let config = ResolvedConfig {
			backend_url: "http://127.0.0.1:1".to_string(),
			timeout: Duration::from_millis(100),
			websites: vec![Website {
				id: "amazon".to_string(),
				label: "Amazon".to_string(),
				checked: true,
			}],
			theme_override: None,
			initial_query: String::new(),
		};
		let client =
			BackendClient::new(config.backend_url.clone(), config.timeout).unwrap();
		App::new(
			&config,
			BackendRuntime::new(client),
			ThemePreference::Light,
			None,
			None,
		)
	}

	fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	#[test]
	fn escape_quits_when_no_overlay_is_open() {
		let mut app = app();
		assert!(app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE)));
	}

	#[test]
	fn escape_closes_the_overlay_before_quitting() {
		let mut app = app();
		app.compare_open = true;
		assert!(!app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE)));
		assert!(!app.compare_open);
		assert!(app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE)));
	}

	#[test]
	fn printable_keys_edit_the_query() {
		let mut app = app();
		app.handle_key(press(KeyCode::Char('t'), KeyModifiers::NONE));
		app.handle_key(press(KeyCode::Char('v'), KeyModifiers::NONE));
		assert_eq!(app.query.text(), "tv");
	}

	#[test]
	fn ctrl_t_toggles_the_theme_instead_of_typing() {
		let mut app = app();
		app.handle_key(press(KeyCode::Char('t'), KeyModifiers::CONTROL));
		assert_eq!(app.theme_preference, ThemePreference::Dark);
		assert_eq!(app.query.text(), "");
	}

	#[test]
	fn alt_digit_toggles_a_website() {
		let mut app = app();
		assert!(app.websites[0].checked);
		app.handle_key(press(KeyCode::Char('1'), KeyModifiers::ALT));
		assert!(!app.websites[0].checked);
		assert_eq!(app.query.text(), "");
	}
}
