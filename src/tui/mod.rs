//! Terminal adapter
//!
//! Draws welcome documents with ratatui and runs a small event loop that
//! hosts a [`WelcomeGate`](crate::gate::WelcomeGate) on top of application
//! content.

mod colors;
mod event;
mod host;
mod layout;
mod welcome;

pub use event::{Event, Handler};
pub use host::{Host, run};
pub use layout::{centered_rect_absolute, wrap_words};
pub use welcome::{draw_document, sheet_rect};
