//! Terminal client for a price-comparison shopping backend.
//!
//! The backend scrapes a set of retail sites for a product query and
//! returns normalized offers; this crate renders them in the terminal
//! with sorting, a bounded comparison selection, aggregate statistics,
//! and a downloadable search history.

pub mod app;
pub mod app_dirs;
pub mod backend;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod logging;
pub mod settings;
pub mod style;
