//! Core application state and behavior for the terminal client.
//!
//! The [`App`] type aggregates search results, selection, history, and UI
//! state. Supporting modules partition the implementation into focused
//! pieces: actions (input handling), rendering, the backend request
//! runtime, and the notification stack.

mod actions;
pub(crate) mod notify;
mod render;
mod runtime;
mod search;
mod state;

pub use notify::{Notification, NotifyKind};
pub use search::{BackendEvent, BackendRuntime};
pub use state::App;
