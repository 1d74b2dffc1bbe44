//! Centralized theme system for the console.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Icon resolution for the closed icon set
//!   (unicode or Nerd Font glyphs)

pub mod icons;
pub mod palette;
pub mod styles;
