//! Pure result-management core: product records, sorting, selection,
//! aggregate statistics, and display formatting.
//!
//! Everything in this module is side-effect free so the interesting
//! behavior can be tested without a terminal or a backend.

mod price;
mod rating;
mod selection;
mod sort;
mod summary;

pub use price::format_price;
pub use rating::{StarRating, star_glyphs};
pub use selection::{MAX_COMPARE, SelectionSet, ToggleOutcome};
pub use sort::{SortMode, sort_results};
pub use summary::{Summary, summarize};
