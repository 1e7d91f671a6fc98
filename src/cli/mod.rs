//! Command-line argument surface.

use std::fmt::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("shopscout {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug, Default)]
#[command(
	name = "shopscout",
	version,
	long_version = long_version(),
	about = "Terminal price-comparison client: search retailers, sort offers, compare products"
)]
/// Command-line arguments accepted by the `shopscout` binary.
pub struct CliArgs {
	/// Additional configuration files, applied after the default locations.
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHOPSCOUT_CONFIG",
		action = ArgAction::Append
	)]
	pub config: Vec<PathBuf>,

	/// Skip the default configuration file locations.
	#[arg(long)]
	pub no_config: bool,

	/// Base URL of the search backend.
	#[arg(long, value_name = "URL", env = "SHOPSCOUT_BACKEND_URL")]
	pub backend_url: Option<String>,

	/// Theme to start with (`light` or `dark`), overriding the persisted
	/// preference.
	#[arg(long, value_name = "NAME")]
	pub theme: Option<String>,

	/// Pre-fill the search input with this product text.
	#[arg(value_name = "QUERY")]
	pub query: Option<String>,

	/// List available themes and exit.
	#[arg(long)]
	pub list_themes: bool,

	/// Print the effective configuration before starting.
	#[arg(long)]
	pub print_config: bool,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn query_is_positional() {
		let args = CliArgs::try_parse_from(["shopscout", "wireless earbuds"]).unwrap();
		assert_eq!(args.query.as_deref(), Some("wireless earbuds"));
	}

	#[test]
	fn backend_url_flag_parses() {
		let args =
			CliArgs::try_parse_from(["shopscout", "--backend-url", "http://localhost:9000"])
				.unwrap();
		assert_eq!(args.backend_url.as_deref(), Some("http://localhost:9000"));
	}
}
