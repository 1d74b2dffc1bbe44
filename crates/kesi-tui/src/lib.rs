//! kesi-tui - Terminal UI for the KESI console
//!
//! This crate provides the ratatui-based terminal interface: screen layout,
//! theme, widgets (header with platform switcher, sidebar menu, content
//! views), event polling, and the synchronous run loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
