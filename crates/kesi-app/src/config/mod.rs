//! Configuration file parsing for the KESI console
//!
//! Supports `~/.config/kesi/config.toml` for UI settings.

pub mod settings;

pub use settings::{default_config_path, load_settings, IconMode, Settings, UiSettings};
