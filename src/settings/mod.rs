//! Configuration loading and resolution utilities.
//!
//! The pipeline mirrors the usual layering: default config file locations,
//! then explicit `--config` files, then `SHOPSCOUT__`-prefixed environment
//! variables, with CLI flags applied last. `load` is the primary entry
//! point and returns a [`ResolvedConfig`] used by the application.

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::{ResolvedConfig, Website};
use sources::build_config;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
