//! Background worker for backend requests.
//!
//! The UI thread never blocks on the network: search, history, and
//! download requests are sent to a dedicated worker thread over a channel
//! and the event loop pumps completed results back out. Every search
//! carries a monotonically increasing id; the orchestrator only applies a
//! response whose id is still the latest, so a search fired while an
//! earlier one is in flight can never be overwritten by the stale reply.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use tracing::warn;

use crate::backend::{BackendClient, BackendError, HistoryEntry, SearchResults};

/// Commands sent to the backend worker thread.
pub enum BackendCommand {
	/// Run a product search.
	Search {
		id: u64,
		product: String,
		websites: Vec<String>,
	},
	/// Fetch the search history list.
	History,
	/// Download a history file into `target_dir`.
	Download {
		filename: String,
		target_dir: PathBuf,
	},
	/// Shut down the worker thread.
	Shutdown,
}

/// Completed work sent back from the worker thread.
pub enum BackendEvent {
	SearchFinished {
		id: u64,
		outcome: Result<SearchResults, BackendError>,
	},
	HistoryLoaded(Result<Vec<HistoryEntry>, BackendError>),
	DownloadFinished {
		filename: String,
		outcome: Result<PathBuf, BackendError>,
	},
}

/// Spawn the worker thread and return its communication channels.
fn spawn(client: BackendClient) -> (Sender<BackendCommand>, Receiver<BackendEvent>) {
	let (command_tx, command_rx) = std::sync::mpsc::channel();
	let (event_tx, event_rx) = std::sync::mpsc::channel();

	thread::Builder::new()
		.name("backend-worker".into())
		.spawn(move || worker_loop(client, command_rx, event_tx))
		.expect("failed to spawn backend worker thread");

	(command_tx, event_rx)
}

fn worker_loop(
	client: BackendClient,
	command_rx: Receiver<BackendCommand>,
	event_tx: Sender<BackendEvent>,
) {
	while let Ok(command) = command_rx.recv() {
		let event = match command {
			BackendCommand::Search {
				id,
				product,
				websites,
			} => BackendEvent::SearchFinished {
				id,
				outcome: client.search(&product, &websites),
			},
			BackendCommand::History => BackendEvent::HistoryLoaded(client.history()),
			BackendCommand::Download {
				filename,
				target_dir,
			} => {
				let outcome = client.download(&filename, &target_dir);
				BackendEvent::DownloadFinished { filename, outcome }
			}
			BackendCommand::Shutdown => break,
		};

		// If the receiver is gone the UI has already exited.
		if event_tx.send(event).is_err() {
			break;
		}
	}
}

/// Handle to the backend worker owned by the application state.
pub struct BackendRuntime {
	tx: Sender<BackendCommand>,
	rx: Receiver<BackendEvent>,
	next_id: u64,
	current_search: Option<u64>,
}

impl BackendRuntime {
	/// Start the worker for `client`.
	#[must_use]
	pub fn new(client: BackendClient) -> Self {
		let (tx, rx) = spawn(client);
		Self {
			tx,
			rx,
			next_id: 0,
			current_search: None,
		}
	}

	/// Queue a search and return its request id.
	pub fn request_search(&mut self, product: String, websites: Vec<String>) -> u64 {
		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.current_search = Some(id);

		let send = self.tx.send(BackendCommand::Search {
			id,
			product,
			websites,
		});
		if send.is_err() {
			warn!("backend worker is gone; search request dropped");
		}
		id
	}

	/// Queue a history refresh.
	pub fn request_history(&self) {
		let _ = self.tx.send(BackendCommand::History);
	}

	/// Queue a history file download.
	pub fn request_download(&self, filename: String, target_dir: PathBuf) {
		let _ = self.tx.send(BackendCommand::Download {
			filename,
			target_dir,
		});
	}

	/// Try to receive one completed event.
	pub fn try_recv(&self) -> Result<BackendEvent, TryRecvError> {
		self.rx.try_recv()
	}

	/// Whether a search response matches the most recent request.
	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.current_search == Some(id)
	}

	/// Whether a search is logically in flight.
	#[must_use]
	pub fn search_in_flight(&self) -> bool {
		self.current_search.is_some()
	}

	/// Mark the in-flight search as settled.
	pub fn finish_search(&mut self) {
		self.current_search = None;
	}

	/// Shut down the worker.
	pub fn shutdown(&self) {
		let _ = self.tx.send(BackendCommand::Shutdown);
	}
}

impl Drop for BackendRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	fn runtime() -> BackendRuntime {
		let client =
			BackendClient::new("http://127.0.0.1:1", Duration::from_millis(200)).unwrap();
		BackendRuntime::new(client)
	}

	#[test]
	fn only_the_latest_search_id_is_current() {
		let mut backend = runtime();
		let first = backend.request_search("phone".into(), vec!["amazon".into()]);
		let second = backend.request_search("phone".into(), vec!["amazon".into()]);
		assert!(!backend.is_current(first));
		assert!(backend.is_current(second));
	}

	#[test]
	fn finishing_clears_the_in_flight_flag() {
		let mut backend = runtime();
		backend.request_search("phone".into(), vec!["amazon".into()]);
		assert!(backend.search_in_flight());
		backend.finish_search();
		assert!(!backend.search_in_flight());
	}
}
