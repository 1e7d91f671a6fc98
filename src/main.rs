use anyhow::Result;
use shopscout::app::{App, BackendRuntime};
use shopscout::backend::BackendClient;
use shopscout::cli::parse_cli;
use shopscout::settings::ResolvedConfig;
use shopscout::style::theme;
use shopscout::{app_dirs, logging, settings};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize()?;
	run(resolved)
}

/// Wire up the backend worker and hand control to the event loop.
fn run(config: ResolvedConfig) -> Result<()> {
	let config_dir = app_dirs::get_config_dir().ok();
	let downloads_dir = app_dirs::get_downloads_dir().ok();

	let preference = config.theme_override.unwrap_or_else(|| {
		config_dir
			.as_deref()
			.map(theme::load_preference)
			.unwrap_or_default()
	});

	let client = BackendClient::new(config.backend_url.clone(), config.timeout)?;
	let backend = BackendRuntime::new(client);

	let mut app = App::new(&config, backend, preference, config_dir, downloads_dir);
	app.run()
}
