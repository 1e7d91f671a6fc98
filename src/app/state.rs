//! Aggregate state for the terminal client.
//!
//! The [`App`] owns the current result set, selection, sort mode, theme,
//! history, and notification stack. Render functions take this state as
//! input; nothing reads ambient globals, and every frame is a full
//! recompute from here.

use std::path::PathBuf;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, warn};

use super::notify::{Notifications, NotifyKind};
use super::search::{BackendEvent, BackendRuntime};
use crate::backend::{HistoryEntry, ProductRecord, SearchResults};
use crate::catalog::{
	SelectionSet, SortMode, Summary, ToggleOutcome, sort_results, summarize,
};
use crate::components::QueryInput;
use crate::settings::{ResolvedConfig, Website};
use crate::style::{Theme, ThemePreference, theme};

pub(crate) const MSG_EMPTY_PRODUCT: &str = "Please enter a product name";
pub(crate) const MSG_NO_WEBSITE: &str = "Please select at least one website";
pub(crate) const MSG_SELECTION_FULL: &str = "You can compare up to 5 products at a time";
pub(crate) const MSG_COMPARE_TOO_FEW: &str = "Please select at least 2 products to compare";

impl Drop for App {
	fn drop(&mut self) {
		self.backend.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	/// Text input for the product query.
	pub query: QueryInput,
	/// Website checkboxes, in configured order.
	pub websites: Vec<Website>,
	/// Active comparator strategy.
	pub sort_mode: SortMode,
	/// The current result set, already sorted under `sort_mode`.
	///
	/// Replaced wholesale on every successful search; re-sorting builds a
	/// new ordering rather than mutating records in place.
	pub results: Vec<ProductRecord>,
	/// Aggregate statistics for `results`, absent when there are none.
	pub summary: Option<Summary>,
	/// Products selected for comparison, by link identity.
	pub selection: SelectionSet,
	/// Past search sessions, in backend order.
	pub history: Vec<HistoryEntry>,
	/// Transient message stack.
	pub notifications: Notifications,
	/// Persisted light/dark preference.
	pub theme_preference: ThemePreference,
	/// Whether the comparison overlay is open.
	pub compare_open: bool,
	/// Cursor over the result rows.
	pub table_state: TableState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) backend: BackendRuntime,
	config_dir: Option<PathBuf>,
	downloads_dir: Option<PathBuf>,
}

impl App {
	/// Construct the application from resolved configuration.
	pub fn new(
		config: &ResolvedConfig,
		backend: BackendRuntime,
		theme_preference: ThemePreference,
		config_dir: Option<PathBuf>,
		downloads_dir: Option<PathBuf>,
	) -> Self {
		let mut app = Self {
			query: QueryInput::new(config.initial_query.clone()),
			websites: config.websites.clone(),
			sort_mode: SortMode::default(),
			results: Vec::new(),
			summary: None,
			selection: SelectionSet::default(),
			history: Vec::new(),
			notifications: Notifications::default(),
			theme_preference,
			compare_open: false,
			table_state: TableState::default(),
			throbber_state: ThrobberState::default(),
			backend,
			config_dir,
			downloads_dir,
		};
		// Initial load mirrors page startup: history first, then an
		// immediate search when a query was passed on the command line.
		app.backend.request_history();
		if !app.query.text().trim().is_empty() {
			app.submit_search();
		}
		app
	}

	/// The style set for the active theme.
	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme_preference.theme()
	}

	/// Whether a search request is in flight.
	#[must_use]
	pub fn loading(&self) -> bool {
		self.backend.search_in_flight()
	}

	/// Validate the form and, if valid, issue a search request.
	///
	/// Validation failures surface as warnings and never reach the
	/// network; existing results are untouched either way.
	pub fn submit_search(&mut self) {
		let product = self.query.text().trim().to_string();
		if product.is_empty() {
			self.notifications.push(MSG_EMPTY_PRODUCT, NotifyKind::Warning);
			return;
		}

		let websites: Vec<String> = self
			.websites
			.iter()
			.filter(|w| w.checked)
			.map(|w| w.id.clone())
			.collect();
		if websites.is_empty() {
			self.notifications.push(MSG_NO_WEBSITE, NotifyKind::Warning);
			return;
		}

		let id = self.backend.request_search(product, websites);
		debug!(id, "search dispatched");
	}

	/// Drain completed backend work into the state.
	pub fn pump_backend(&mut self) {
		while let Ok(event) = self.backend.try_recv() {
			match event {
				BackendEvent::SearchFinished { id, outcome } => {
					if !self.backend.is_current(id) {
						debug!(id, "dropping stale search response");
						continue;
					}
					self.backend.finish_search();
					match outcome {
						Ok(results) => self.apply_results(results),
						Err(err) => {
							warn!(%err, "search failed");
							self.notifications.push(err.user_message(), NotifyKind::Error);
						}
					}
				}
				BackendEvent::HistoryLoaded(outcome) => match outcome {
					Ok(entries) => self.history = entries,
					// Silent degradation: keep whatever was on screen.
					Err(err) => warn!(%err, "history refresh failed"),
				},
				BackendEvent::DownloadFinished { filename, outcome } => match outcome {
					Ok(path) => {
						self.notifications.push(
							format!("Saved {} to {}", filename, path.display()),
							NotifyKind::Success,
						);
					}
					Err(err) => {
						warn!(%err, filename, "download failed");
						self.notifications
							.push(format!("Could not download {filename}"), NotifyKind::Error);
					}
				},
			}
		}
	}

	/// Install a fresh result set: sort, summarize, reset the selection,
	/// and queue a history refresh.
	fn apply_results(&mut self, results: SearchResults) {
		// The success message reports the backend's count, not ours.
		let count = results.count;
		self.results = sort_results(&results.records, self.sort_mode);
		self.summary = summarize(&self.results);
		self.selection.clear();
		self.compare_open = false;
		self.table_state
			.select((!self.results.is_empty()).then_some(0));
		self.backend.request_history();
		self.notifications
			.push(format!("Found {count} products!"), NotifyKind::Success);
	}

	/// Re-sort the existing result set under the next mode. Local only,
	/// no network call.
	pub fn cycle_sort(&mut self) {
		self.sort_mode = self.sort_mode.next();
		self.results = sort_results(&self.results, self.sort_mode);
		if !self.results.is_empty() {
			self.table_state.select(Some(0));
		}
	}

	/// Flip one website checkbox. With a non-empty query this re-runs the
	/// whole search cycle, mirroring filter changes on the page.
	pub fn toggle_website(&mut self, index: usize) {
		let Some(website) = self.websites.get_mut(index) else {
			return;
		};
		website.checked = !website.checked;
		if !self.query.text().trim().is_empty() {
			self.submit_search();
		}
	}

	/// Toggle comparison membership for the product under the cursor.
	pub fn toggle_selection(&mut self) {
		let Some(record) = self
			.table_state
			.selected()
			.and_then(|row| self.results.get(row))
		else {
			return;
		};
		let link = record.link.clone();
		if self.selection.toggle(&link) == ToggleOutcome::Rejected {
			self.notifications.push(MSG_SELECTION_FULL, NotifyKind::Warning);
		}
	}

	/// Open the comparison overlay, provided at least two products are
	/// selected.
	pub fn open_compare(&mut self) {
		if !self.selection.can_compare() {
			self.notifications.push(MSG_COMPARE_TOO_FEW, NotifyKind::Warning);
			return;
		}
		self.compare_open = true;
	}

	/// Close the comparison overlay. Idempotent.
	pub fn close_compare(&mut self) {
		self.compare_open = false;
	}

	/// Selected records in selection order, resolved against the current
	/// result set.
	#[must_use]
	pub fn selected_records(&self) -> Vec<&ProductRecord> {
		self.selection
			.links()
			.iter()
			.filter_map(|link| self.results.iter().find(|r| &r.link == link))
			.collect()
	}

	/// Flip the theme and persist the new preference.
	pub fn toggle_theme(&mut self) {
		self.theme_preference = self.theme_preference.toggled();
		if let Some(dir) = &self.config_dir {
			theme::store_preference(dir, self.theme_preference);
		}
	}

	/// Queue a download of the most recent history entry.
	pub fn download_latest_history(&mut self) {
		let Some(entry) = self.history.first() else {
			self.notifications
				.push("No search history to download", NotifyKind::Info);
			return;
		};
		let Some(dir) = self.downloads_dir.clone() else {
			self.notifications
				.push("No download directory available", NotifyKind::Error);
			return;
		};
		self.backend.request_download(entry.filename.clone(), dir);
	}

	/// Ask the backend for a fresh history list.
	pub fn refresh_history(&self) {
		self.backend.request_history();
	}

	pub(crate) fn move_cursor_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_cursor_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.results.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
