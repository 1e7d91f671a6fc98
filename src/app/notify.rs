use std::time::{Duration, Instant};

/// How long a notification stays on screen.
const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
	Info,
	Success,
	Error,
	Warning,
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Notification {
	pub message: String,
	pub kind: NotifyKind,
	created: Instant,
}

/// Stack of auto-expiring notifications.
///
/// Each entry has an independent timer; pushing never blocks or
/// deduplicates, and the event loop prunes expired entries every tick.
#[derive(Debug, Default)]
pub struct Notifications {
	entries: Vec<Notification>,
}

impl Notifications {
	/// Append a message to the stack.
	pub fn push(&mut self, message: impl Into<String>, kind: NotifyKind) {
		self.entries.push(Notification {
			message: message.into(),
			kind,
			created: Instant::now(),
		});
	}

	/// Drop entries older than the display window.
	pub fn prune(&mut self) {
		self.prune_at(Instant::now());
	}

	fn prune_at(&mut self, now: Instant) {
		self.entries
			.retain(|entry| now.duration_since(entry.created) < NOTIFICATION_TTL);
	}

	/// Currently visible notifications, oldest first.
	#[must_use]
	pub fn visible(&self) -> &[Notification] {
		&self.entries
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_stack_without_deduplication() {
		let mut notifications = Notifications::default();
		notifications.push("Found 3 products!", NotifyKind::Success);
		notifications.push("Found 3 products!", NotifyKind::Success);
		assert_eq!(notifications.visible().len(), 2);
	}

	#[test]
	fn entries_expire_after_the_display_window() {
		let mut notifications = Notifications::default();
		notifications.push("old", NotifyKind::Info);
		let later = Instant::now() + NOTIFICATION_TTL + Duration::from_millis(1);
		notifications.prune_at(later);
		assert!(notifications.is_empty());
	}

	#[test]
	fn fresh_entries_survive_pruning() {
		let mut notifications = Notifications::default();
		notifications.push("fresh", NotifyKind::Warning);
		notifications.prune();
		assert_eq!(notifications.visible().len(), 1);
	}
}
