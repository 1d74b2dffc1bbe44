//! # kesi-core - Core Domain Types
//!
//! Foundation crate for the KESI console. Provides the platform/menu
//! registry, the route resolver, error handling, logging setup, and the
//! sample fleet data backing the content views.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Registry (`registry`)
//! - [`PlatformId`] - Closed set of platform identifiers (iot, business, ...)
//! - [`Platform`] - Display metadata for a platform
//! - [`MenuEntry`] - A navigable sidebar destination (recursive)
//! - [`Registry`] - Immutable catalog of platforms and their ordered menus
//!
//! ### Routing (`route`)
//! - [`resolve()`] - Pure path -> (active platform, active menu entry)
//! - [`redirect()`] - Root and platform-root redirect rules
//! - [`Resolution`] - Result of resolving a path
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Fleet Data (`fleet`)
//! - Sample devices, alarms, metrics, agents, and projects rendered by the
//!   content views. Static data; there is no data pipeline behind it.
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use kesi_core::prelude::*;
//! ```

pub mod error;
pub mod fleet;
pub mod logging;
pub mod registry;
pub mod route;

/// Prelude for common imports used throughout all KESI crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use fleet::{
    AgentStatus, AiAgent, Alarm, AlarmLevel, BusinessMetric, DeviceStatus, IotDevice, Trend,
    VideoDevice, VisualizationProject,
};
pub use registry::{MenuEntry, MenuIcon, Platform, PlatformId, Registry};
pub use route::{redirect, resolve, Resolution};
