//! Platform and menu registry
//!
//! The console organizes itself around a closed set of platforms ("中台"),
//! each owning an ordered sidebar menu. The catalog is built once at startup
//! via [`Registry::standard()`] and passed by reference into the resolver and
//! the navigation shell; nothing mutates it afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one of the fixed top-level platforms.
///
/// The set is closed: a path segment either parses to one of these variants
/// or names no platform at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Iot,
    Business,
    Video,
    Visualization,
    Ai,
}

impl PlatformId {
    /// All platform identifiers in display order.
    pub const ALL: [PlatformId; 5] = [
        PlatformId::Iot,
        PlatformId::Business,
        PlatformId::Video,
        PlatformId::Visualization,
        PlatformId::Ai,
    ];

    /// The URL path segment for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Iot => "iot",
            PlatformId::Business => "business",
            PlatformId::Video => "video",
            PlatformId::Visualization => "visualization",
            PlatformId::Ai => "ai",
        }
    }

    /// Parse a path segment into a platform identifier.
    ///
    /// Returns `None` for anything outside the closed set; an unknown
    /// segment is "no platform", never an error.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "iot" => Some(PlatformId::Iot),
            "business" => Some(PlatformId::Business),
            "video" => Some(PlatformId::Video),
            "visualization" => Some(PlatformId::Visualization),
            "ai" => Some(PlatformId::Ai),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of renderable icons.
///
/// Every icon a platform or menu entry may carry is an enum variant,
/// resolved by the theme with a total match. There is no runtime icon
/// lookup that could miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Box,
    Cpu,
    Settings,
    Alert,
    LineChart,
    FileText,
    Cloud,
    Database,
    BarChart,
    Image,
    Workflow,
    Spreadsheet,
    Code,
    Camera,
    Radio,
    Wand,
    Monitor,
    Folder,
    Edit,
    Layers,
    Copy,
    Bot,
    Brain,
    Book,
    Briefcase,
    Video,
    Plane,
}

/// Display metadata for a platform.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub icon: MenuIcon,
    pub description: String,
}

impl Platform {
    pub fn new(
        id: PlatformId,
        name: impl Into<String>,
        icon: MenuIcon,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon,
            description: description.into(),
        }
    }
}

/// A single navigable destination within a platform's sidebar menu.
///
/// `children` is part of the data shape and walked recursively by the
/// resolver, though the standard catalog declares none.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Identifier unique within the owning platform's entry list.
    pub id: String,
    pub label: String,
    pub icon: MenuIcon,
    /// Absolute route path, unique across the whole application.
    pub path: String,
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// A leaf entry with no children.
    pub fn leaf(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: MenuIcon,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            path: path.into(),
            children: Vec::new(),
        }
    }
}

/// Immutable catalog of platforms and their ordered menus.
///
/// Order is significant: it dictates both render order and the
/// "navigate to first entry" default when a platform is selected.
#[derive(Debug, Clone)]
pub struct Registry {
    platforms: Vec<Platform>,
    menus: Vec<(PlatformId, Vec<MenuEntry>)>,
}

impl Registry {
    /// Build a registry from explicit parts.
    pub fn new(platforms: Vec<Platform>, menus: Vec<(PlatformId, Vec<MenuEntry>)>) -> Self {
        Self { platforms, menus }
    }

    /// Ordered sequence of all platforms. Stable across calls.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Look up a platform's display metadata.
    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Ordered menu for a platform.
    ///
    /// Returns an empty slice (not an error) when the platform has no
    /// registered menu -- the UI must never crash on an unmapped platform.
    pub fn menu_for(&self, id: PlatformId) -> &[MenuEntry] {
        self.menus
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Default landing path: the first platform's first menu entry.
    pub fn default_path(&self) -> Option<&str> {
        let first = self.platforms.first()?;
        self.menu_for(first.id).first().map(|e| e.path.as_str())
    }

    /// The standard KESI catalog: five platforms and their menus.
    pub fn standard() -> Self {
        use MenuIcon::*;

        let platforms = vec![
            Platform::new(PlatformId::Iot, "IoT", Plane, "Device access and management"),
            Platform::new(
                PlatformId::Business,
                "Business",
                Briefcase,
                "Business workflows and data",
            ),
            Platform::new(
                PlatformId::Video,
                "Video",
                Video,
                "Video streaming and analysis",
            ),
            Platform::new(
                PlatformId::Visualization,
                "Visualization",
                BarChart,
                "Dashboards and data screens",
            ),
            Platform::new(PlatformId::Ai, "AI", Bot, "Algorithms and agent management"),
        ];

        let menus = vec![
            (
                PlatformId::Iot,
                vec![
                    MenuEntry::leaf("dashboard", "Dashboard", Dashboard, "/iot/dashboard"),
                    MenuEntry::leaf("models", "Models", Box, "/iot/models"),
                    MenuEntry::leaf("devices", "Devices", Cpu, "/iot/devices"),
                    MenuEntry::leaf("drivers", "Drivers", Settings, "/iot/drivers"),
                    MenuEntry::leaf("alarms", "Alarms", Alert, "/iot/alarms"),
                    MenuEntry::leaf("analytics", "Analytics", LineChart, "/iot/analytics"),
                    MenuEntry::leaf("logs", "Log Analysis", FileText, "/iot/logs"),
                    MenuEntry::leaf("push", "Data Push", Cloud, "/iot/push"),
                ],
            ),
            (
                PlatformId::Business,
                vec![
                    MenuEntry::leaf("dashboard", "Dashboard", Dashboard, "/business/dashboard"),
                    MenuEntry::leaf("data", "Data", Database, "/business/data"),
                    MenuEntry::leaf("analysis", "Analysis", BarChart, "/business/analysis"),
                    MenuEntry::leaf("media", "Media Library", Image, "/business/media"),
                    MenuEntry::leaf("workflow", "Workflows", Workflow, "/business/workflow"),
                    MenuEntry::leaf("reports", "Reports", Spreadsheet, "/business/reports"),
                    MenuEntry::leaf("api", "Data APIs", Code, "/business/api"),
                ],
            ),
            (
                PlatformId::Video,
                vec![
                    MenuEntry::leaf("dashboard", "Dashboard", Dashboard, "/video/dashboard"),
                    MenuEntry::leaf("gb28181", "GB28181", Camera, "/video/gb28181"),
                    MenuEntry::leaf("streams", "Streams", Radio, "/video/streams"),
                    MenuEntry::leaf("algorithms", "Algorithms", Wand, "/video/algorithms"),
                    MenuEntry::leaf("devices", "Devices", Monitor, "/video/devices"),
                ],
            ),
            (
                PlatformId::Visualization,
                vec![
                    MenuEntry::leaf("projects", "Projects", Folder, "/visualization/projects"),
                    MenuEntry::leaf("editor", "Editor", Edit, "/visualization/editor"),
                    MenuEntry::leaf("components", "Components", Layers, "/visualization/components"),
                    MenuEntry::leaf("templates", "Templates", Copy, "/visualization/templates"),
                ],
            ),
            (
                PlatformId::Ai,
                vec![
                    MenuEntry::leaf("agents", "Agents", Bot, "/ai/agents"),
                    MenuEntry::leaf("algorithms", "Algorithm Hub", Brain, "/ai/algorithms"),
                    MenuEntry::leaf("models", "Models", Box, "/ai/models"),
                    MenuEntry::leaf("knowledge", "Knowledge Bases", Book, "/ai/knowledge"),
                ],
            ),
        ];

        Self::new(platforms, menus)
    }
}
