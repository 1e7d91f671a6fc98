use std::time::Duration;

use crate::style::ThemePreference;

/// A selectable retailer, as presented in the website checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website {
	/// Identifier sent to the backend.
	pub id: String,
	/// Label shown in the UI.
	pub label: String,
	/// Initial checkbox state.
	pub checked: bool,
}

/// Application-ready configuration derived from user input, config files
/// and sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub backend_url: String,
	pub timeout: Duration,
	pub websites: Vec<Website>,
	/// Theme requested via config or CLI; `None` means use the persisted
	/// preference.
	pub theme_override: Option<ThemePreference>,
	pub initial_query: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Backend URL: {}", self.backend_url);
		println!("  Request timeout: {}s", self.timeout.as_secs());
		println!(
			"  Websites: {}",
			self.websites
				.iter()
				.map(|w| {
					if w.checked {
						format!("{} (checked)", w.id)
					} else {
						w.id.clone()
					}
				})
				.collect::<Vec<_>>()
				.join(", ")
		);
		println!(
			"  Theme: {}",
			self.theme_override
				.map(ThemePreference::name)
				.unwrap_or("(persisted preference)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
	}
}
