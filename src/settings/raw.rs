use std::time::Duration;

use anyhow::{Result, bail};
use serde::Deserialize;

use super::resolved::{ResolvedConfig, Website};
use crate::cli::CliArgs;
use crate::style::ThemePreference;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Mirror of the configuration file representation before CLI overrides
/// and validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	backend: BackendSection,
	search: SearchSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
	url: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	websites: Option<Vec<WebsiteEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct WebsiteEntry {
	id: String,
	label: Option<String>,
	checked: bool,
}

impl Default for WebsiteEntry {
	fn default() -> Self {
		Self {
			id: String::new(),
			label: None,
			checked: true,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
}

/// Retailers queried when no `[search] websites` table is configured,
/// matching the sites the default backend scrapes.
fn default_websites() -> Vec<Website> {
	[("amazon", "Amazon"), ("daraz", "Daraz"), ("priceoye", "PriceOye")]
		.into_iter()
		.map(|(id, label)| Website {
			id: id.to_string(),
			label: label.to_string(),
			checked: true,
		})
		.collect()
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = &cli.backend_url {
			self.backend.url = Some(url.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating
	/// and filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let backend_url = self
			.backend
			.url
			.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
		if backend_url.trim().is_empty() {
			bail!("backend.url must not be empty");
		}

		let timeout_secs = self.backend.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		if timeout_secs == 0 {
			bail!("backend.timeout_secs must be greater than zero");
		}

		let websites = match self.search.websites {
			Some(entries) => {
				if entries.is_empty() {
					bail!("search.websites must list at least one website");
				}
				entries
					.into_iter()
					.map(|entry| {
						if entry.id.trim().is_empty() {
							bail!("search.websites entries need a non-empty id");
						}
						let label = entry
							.label
							.unwrap_or_else(|| capitalize(&entry.id));
						Ok(Website {
							id: entry.id,
							label,
							checked: entry.checked,
						})
					})
					.collect::<Result<Vec<_>>>()?
			}
			None => default_websites(),
		};

		let theme_override = match self.ui.theme.as_deref() {
			Some(name) => match ThemePreference::by_name(name) {
				Some(preference) => Some(preference),
				None => bail!("unknown theme '{name}' (expected 'light' or 'dark')"),
			},
			None => None,
		};

		Ok(ResolvedConfig {
			backend_url,
			timeout: Duration::from_secs(timeout_secs),
			websites,
			theme_override,
			initial_query: cli.query.clone().unwrap_or_default(),
		})
	}
}

fn capitalize(id: &str) -> String {
	let mut chars = id.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
