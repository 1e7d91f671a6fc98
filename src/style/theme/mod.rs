//! Theme types, the builtin light/dark pair, and preference persistence.

mod builtins;
mod persist;
mod types;

pub use persist::{load_preference, store_preference};
pub use types::Theme;

/// Binary theme preference persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
	#[default]
	Light,
	Dark,
}

impl ThemePreference {
	/// Flip between light and dark.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Canonical name, as stored on disk and accepted in config.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Header indicator glyph: the icon shows what a toggle switches to.
	#[must_use]
	pub fn indicator(self) -> &'static str {
		match self {
			Self::Light => "☾",
			Self::Dark => "☀",
		}
	}

	/// The style set for this preference.
	#[must_use]
	pub fn theme(self) -> Theme {
		match self {
			Self::Light => builtins::LIGHT,
			Self::Dark => builtins::DARK,
		}
	}

	/// Parse a preference name, case-insensitively.
	#[must_use]
	pub fn by_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"light" => Some(Self::Light),
			"dark" => Some(Self::Dark),
			_ => None,
		}
	}
}

/// Names of the available themes, for `--list-themes`.
#[must_use]
pub fn names() -> Vec<&'static str> {
	vec![ThemePreference::Light.name(), ThemePreference::Dark.name()]
}

impl Default for Theme {
	fn default() -> Self {
		ThemePreference::default().theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_flips_and_returns() {
		assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
		assert_eq!(ThemePreference::Light.toggled().toggled(), ThemePreference::Light);
	}

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(ThemePreference::by_name("Dark"), Some(ThemePreference::Dark));
		assert_eq!(ThemePreference::by_name(" light "), Some(ThemePreference::Light));
		assert_eq!(ThemePreference::by_name("solarized"), None);
	}

	#[test]
	fn default_is_light() {
		assert_eq!(ThemePreference::default(), ThemePreference::Light);
	}
}
