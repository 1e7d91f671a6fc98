//! Resolve configuration and data directories for `shopscout`.
//!
//! The helpers in this module respect environment overrides while falling
//! back to platform-appropriate locations provided by the `directories`
//! crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "shopscout";
const APPLICATION: &str = "shopscout";

const CONFIG_DIR_ENV: &str = "SHOPSCOUT_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SHOPSCOUT_DATA_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for shopscout"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers
/// can use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() { None } else { Some(PathBuf::from(value)) }
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores logs and downloaded history files.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory that downloaded history files are written to.
pub fn get_downloads_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join("downloads"))
}
