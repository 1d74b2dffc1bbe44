//! kesi-app - Application state and navigation shell for the KESI console
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, a [`Message`] enum, and an
//! [`handler::update`] function that applies synchronous state transitions.
//! All navigation state (active platform, active menu entry) is derived from
//! the current path on demand; only the path, the history, and the sidebar
//! flag are stored.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::{load_settings, IconMode, Settings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
