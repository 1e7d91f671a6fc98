//! File-backed diagnostics.
//!
//! The UI owns the terminal, so tracing output goes to `shopscout.log`
//! under the data directory instead of stderr. The filter is controlled
//! with `SHOPSCOUT_LOG` (standard `tracing_subscriber` env-filter syntax)
//! and defaults to `info`.

use std::fs::{self, File};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "shopscout.log";
const FILTER_ENV: &str = "SHOPSCOUT_LOG";

/// Install the global subscriber writing to the data-dir log file.
pub fn initialize() -> Result<()> {
	let data_dir = app_dirs::get_data_dir()?;
	fs::create_dir_all(&data_dir)
		.with_context(|| format!("could not create data directory {}", data_dir.display()))?;
	let log_path = data_dir.join(LOG_FILE);
	let log_file = File::options()
		.create(true)
		.append(true)
		.open(&log_path)
		.with_context(|| format!("could not open log file {}", log_path.display()))?;

	let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Arc::new(log_file))
		.with_ansi(false)
		.init();

	Ok(())
}
