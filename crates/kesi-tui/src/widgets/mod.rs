//! Widgets for the console UI
//!
//! - `header`: brand + platform switcher + shortcut hints
//! - `sidebar`: collapsible menu for the active platform
//! - `content`: the view composer (path -> rendered view)

pub mod content;
pub mod header;
pub mod sidebar;

pub use content::ContentView;
pub use header::MainHeader;
pub use sidebar::Sidebar;
