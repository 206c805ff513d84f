//! Welcomer - first-run welcome screens for terminal applications
//!
//! A host application describes its welcome screen with a [`WelcomeConfig`],
//! picks a [`WelcomeStyle`], and lets a [`WelcomeGate`] decide whether the
//! screen should appear. The gate shows each screen once per welcome key and
//! remembers dismissals in a [`SeenStore`].

pub mod config;
pub mod gate;
pub mod paths;
pub mod presets;
pub mod render;
pub mod store;
pub mod tui;

pub use config::{Color, FeatureItem, PrivacyAction, WelcomeConfig};
pub use gate::{DismissReason, GateState, WelcomeGate};
pub use render::{Document, WelcomeStyle, render};
pub use store::{DEFAULT_WELCOME_KEY, FileStore, MemoryStore, SeenStore};
