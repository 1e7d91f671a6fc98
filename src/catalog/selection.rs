/// Maximum number of products that can be selected for comparison.
pub const MAX_COMPARE: usize = 5;

/// Result of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
	/// The product was added to the selection.
	Added,
	/// The product was removed from the selection.
	Removed,
	/// The selection was already at capacity; nothing changed.
	Rejected,
}

/// Insertion-ordered set of product links chosen for comparison.
///
/// Links are the identity key for products, so membership is tracked by
/// link alone and the owning state resolves back to full records when the
/// comparison view needs them. Capacity is capped at [`MAX_COMPARE`].
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
	links: Vec<String>,
}

impl SelectionSet {
	/// Toggle membership for `link`.
	pub fn toggle(&mut self, link: &str) -> ToggleOutcome {
		if let Some(position) = self.links.iter().position(|l| l == link) {
			self.links.remove(position);
			return ToggleOutcome::Removed;
		}
		if self.links.len() >= MAX_COMPARE {
			return ToggleOutcome::Rejected;
		}
		self.links.push(link.to_string());
		ToggleOutcome::Added
	}

	#[must_use]
	pub fn contains(&self, link: &str) -> bool {
		self.links.iter().any(|l| l == link)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.links.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.links.is_empty()
	}

	/// Whether enough products are selected to open the comparison view.
	#[must_use]
	pub fn can_compare(&self) -> bool {
		self.links.len() >= 2
	}

	/// Links in the order they were selected.
	#[must_use]
	pub fn links(&self) -> &[String] {
		&self.links
	}

	/// Drop every selection, e.g. when a new result set replaces the old.
	pub fn clear(&mut self) {
		self.links.clear();
	}
}
