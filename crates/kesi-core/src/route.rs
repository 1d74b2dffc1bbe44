//! Route resolution
//!
//! Pure mapping from an absolute path string to the active platform and the
//! active menu entry. Called on every path change; no mutation, no I/O.

use crate::registry::{MenuEntry, PlatformId, Registry};

/// Result of resolving a path against the registry.
///
/// Either side may be absent: an unknown first segment yields no platform,
/// and a path with no exactly-matching menu entry yields no entry. Neither
/// case is an error.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'r> {
    pub platform: Option<PlatformId>,
    pub entry: Option<&'r MenuEntry>,
}

impl Resolution<'_> {
    pub fn none() -> Self {
        Self {
            platform: None,
            entry: None,
        }
    }
}

/// Resolve a path to its active platform and menu entry.
///
/// The first non-empty segment is the platform candidate; it must exactly
/// match a known platform id. Entry resolution is a second, independent
/// step: the active platform's menu is scanned for an entry whose `path` is
/// exactly equal to the full path. Exact match only -- a deeper sub-route
/// such as `/iot/devices/123` keeps the platform active but highlights no
/// menu entry.
pub fn resolve<'r>(registry: &'r Registry, path: &str) -> Resolution<'r> {
    let Some(segment) = path.split('/').find(|s| !s.is_empty()) else {
        return Resolution::none();
    };

    let Some(platform) = PlatformId::parse(segment) else {
        return Resolution::none();
    };

    let entry = find_exact(registry.menu_for(platform), path);

    Resolution {
        platform: Some(platform),
        entry,
    }
}

/// Depth-first exact-path search, descending into `children`.
fn find_exact<'a>(entries: &'a [MenuEntry], path: &str) -> Option<&'a MenuEntry> {
    for entry in entries {
        if entry.path == path {
            return Some(entry);
        }
        if let Some(child) = find_exact(&entry.children, path) {
            return Some(child);
        }
    }
    None
}

/// Redirect rules for the router contract.
///
/// - the root path `/` redirects to the default platform's first entry
/// - a platform-root path (`/iot`, `/iot/`) redirects to that platform's
///   first menu entry
///
/// Any other path, including unknown ones, passes through unredirected;
/// the view composer falls back to a placeholder for unresolvable leaves.
pub fn redirect(registry: &Registry, path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let Some(first) = segments.next() else {
        // Root path
        return registry.default_path().map(String::from);
    };

    if segments.next().is_some() {
        return None; // already a leaf path
    }

    let platform = PlatformId::parse(first)?;
    registry
        .menu_for(platform)
        .first()
        .map(|entry| entry.path.clone())
}
