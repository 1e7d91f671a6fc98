//! Theme preference persistence.
//!
//! The preference lives in a single plain-text file under the config
//! directory. Reads fall back to the default on any problem and writes
//! are best-effort: a machine that cannot persist the preference still
//! gets a working toggle for the session.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ThemePreference;

const PREFERENCE_FILE: &str = "theme";

/// Read the persisted preference, defaulting to light when the file is
/// missing or unreadable.
#[must_use]
pub fn load_preference(config_dir: &Path) -> ThemePreference {
	let path = config_dir.join(PREFERENCE_FILE);
	match fs::read_to_string(&path) {
		Ok(contents) => ThemePreference::by_name(&contents).unwrap_or_default(),
		Err(_) => ThemePreference::default(),
	}
}

/// Persist the preference, ignoring failures.
pub fn store_preference(config_dir: &Path, preference: ThemePreference) {
	if let Err(err) = fs::create_dir_all(config_dir)
		.and_then(|()| fs::write(config_dir.join(PREFERENCE_FILE), preference.name()))
	{
		debug!(%err, "could not persist theme preference");
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn round_trips_through_the_config_dir() {
		let dir = tempdir().unwrap();
		store_preference(dir.path(), ThemePreference::Dark);
		assert_eq!(load_preference(dir.path()), ThemePreference::Dark);

		store_preference(dir.path(), ThemePreference::Light);
		assert_eq!(load_preference(dir.path()), ThemePreference::Light);
	}

	#[test]
	fn missing_file_defaults_to_light() {
		let dir = tempdir().unwrap();
		assert_eq!(load_preference(dir.path()), ThemePreference::Light);
	}

	#[test]
	fn corrupt_file_defaults_to_light() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join(PREFERENCE_FILE), "chartreuse").unwrap();
		assert_eq!(load_preference(dir.path()), ThemePreference::Light);
	}
}
