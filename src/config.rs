//! Screen configuration.
//!
//! All values have built-in defaults. With the `config` feature enabled a
//! `screen.toml` file can override them; missing keys fall back to the defaults.

use crate::theme::PaletteKind;

#[cfg(feature = "config")]
use crate::error::{Result, ScreenError};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::{Path, PathBuf};

/// Number of addressable context registers.
pub const DEFAULT_CONTEXT_REGISTERS: usize = 10;
/// Scrollbar track length used when a caller does not pass one.
pub const DEFAULT_MAX_MENU_ROWS: u16 = 20;
/// Columns reserved around the menu before splitting the rest into three items.
pub const DEFAULT_MENU_MARGIN: u16 = 10;

pub const SYMBOL_UP_TRIANGLE: &str = "\u{25B2}";
pub const SYMBOL_DOWN_TRIANGLE: &str = "\u{25BC}";

#[cfg(feature = "config")]
const CONFIG_DIR_NAME: &str = "curse-screen";
#[cfg(feature = "config")]
const CONFIG_FILE_NAME: &str = "screen.toml";

/// Tunables for theme initialization, register capacity and scrollbars.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ScreenConfig {
    /// Capacity of the context register store
    pub context_registers: usize,

    /// Default scrollbar track length
    pub max_menu_rows: u16,

    /// Columns subtracted before computing the menu item width
    pub menu_margin: u16,

    /// Which palette preset gets registered
    pub palette: PaletteKind,

    /// Marker drawn above a scrollbar track
    pub scroll_up_symbol: String,

    /// Marker drawn below a scrollbar track
    pub scroll_down_symbol: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            context_registers: DEFAULT_CONTEXT_REGISTERS,
            max_menu_rows: DEFAULT_MAX_MENU_ROWS,
            menu_margin: DEFAULT_MENU_MARGIN,
            palette: PaletteKind::Standard,
            scroll_up_symbol: SYMBOL_UP_TRIANGLE.to_string(),
            scroll_down_symbol: SYMBOL_DOWN_TRIANGLE.to_string(),
        }
    }
}

#[cfg(feature = "config")]
impl ScreenConfig {
    /// Location of the per-user config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| ScreenError::config(err.to_string()))
    }

    /// Load the configuration stored at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            ScreenError::config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config = Self::from_toml(&text)?;
        log::debug!("loaded screen config from {}", path.display());
        Ok(config)
    }

    /// Load the per-user config file, or the defaults when there is none
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Serialize to TOML, e.g. to write out a starter file
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| ScreenError::config(err.to_string()))
    }
}
