//! User settings loaded from `config.toml`
//!
//! A missing file yields defaults; a malformed file is a configuration
//! error surfaced at startup rather than silently ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kesi_core::{Error, Result};

/// Icon rendering mode for the sidebar and platform switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs (requires a Nerd Font installed)
    NerdFonts,
}

/// UI settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UiSettings {
    /// Icon rendering mode
    pub icons: IconMode,

    /// Terminals narrower than this start with the sidebar collapsed
    pub narrow_viewport_cols: u16,

    /// Route to open at startup instead of the default landing path
    pub start_path: Option<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::Unicode,
            narrow_viewport_cols: 100,
            start_path: None,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
}

/// Default settings file location: `~/.config/kesi/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("kesi").join("config.toml")
}

/// Load settings from the given path, or the default location.
///
/// A missing file is not an error; defaults are returned.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&contents)
        .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.narrow_viewport_cols, 100);
        assert!(settings.ui.start_path.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[ui]
icons = "nerd-fonts"
narrow-viewport-cols = 80
start-path = "/video/streams"
"#
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.narrow_viewport_cols, 80);
        assert_eq!(settings.ui.start_path.as_deref(), Some("/video/streams"));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nicons = \"unicode\"\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.narrow_viewport_cols, 100);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nicons = ???").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }
}
