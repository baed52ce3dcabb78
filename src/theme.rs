//! Color palette and screen layout.
//!
//! The palette is a fixed table from semantic color names to color pairs. It is
//! built once, registered with the backend by [`Theme::initialize`], and never
//! changes afterwards.

use crate::backend::{Attr, PairId, TerminalBackend};
use crate::config::ScreenConfig;
use crate::error::{Result, ScreenError};
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Background shared by the single-color pairs (terminal default).
pub const SHARED_BACKGROUND: Color = Color::Reset;

/// Semantic color names. The discriminant is the pair id registered with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorName {
    Red = 1,
    Cyan = 2,
    Green = 3,
    Yellow = 4,
    Magenta = 5,
    Blue = 6,
    White = 7,
    LightOrange = 8,
    DarkOrange = 9,
    DarkGray = 10,
    LightGray = 11,
    BlueOnGray = 12,
    GrayOnBlue = 13,
    WhiteOnGray = 14,
    GrayOnWhite = 15,
}

impl ColorName {
    pub const ALL: [ColorName; 15] = [
        ColorName::Red,
        ColorName::Cyan,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Magenta,
        ColorName::Blue,
        ColorName::White,
        ColorName::LightOrange,
        ColorName::DarkOrange,
        ColorName::DarkGray,
        ColorName::LightGray,
        ColorName::BlueOnGray,
        ColorName::GrayOnBlue,
        ColorName::WhiteOnGray,
        ColorName::GrayOnWhite,
    ];

    pub const fn id(self) -> PairId {
        PairId(self as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Cyan => "cyan",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Magenta => "magenta",
            ColorName::Blue => "blue",
            ColorName::White => "white",
            ColorName::LightOrange => "light-orange",
            ColorName::DarkOrange => "dark-orange",
            ColorName::DarkGray => "dark-gray",
            ColorName::LightGray => "light-gray",
            ColorName::BlueOnGray => "blue-on-gray",
            ColorName::GrayOnBlue => "gray-on-blue",
            ColorName::WhiteOnGray => "white-on-gray",
            ColorName::GrayOnWhite => "gray-on-white",
        }
    }

    fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorName {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        ColorName::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ScreenError::invalid_argument(format!("unknown color name: {s}")))
    }
}

/// A registered foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub id: PairId,
    pub fg: Color,
    pub bg: Color,
}

/// Palette presets selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum PaletteKind {
    #[default]
    Standard,
    Monochrome,
    HighContrast,
}

impl FromStr for PaletteKind {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(PaletteKind::Standard),
            "monochrome" => Ok(PaletteKind::Monochrome),
            "high-contrast" => Ok(PaletteKind::HighContrast),
            other => Err(ScreenError::invalid_argument(format!(
                "unknown palette: {other}"
            ))),
        }
    }
}

/// Immutable table of every [`ColorName`]'s pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pairs: [ColorPair; 15],
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// 256-color palette
    pub fn standard() -> Self {
        Self::from_colors(|color| match color {
            ColorName::Red => (Color::Red, SHARED_BACKGROUND),
            ColorName::Cyan => (Color::Cyan, SHARED_BACKGROUND),
            ColorName::Green => (Color::Green, SHARED_BACKGROUND),
            ColorName::Yellow => (Color::Yellow, SHARED_BACKGROUND),
            ColorName::Magenta => (Color::Magenta, SHARED_BACKGROUND),
            ColorName::Blue => (Color::Blue, SHARED_BACKGROUND),
            ColorName::White => (Color::White, SHARED_BACKGROUND),
            ColorName::LightOrange => (Color::Indexed(209), SHARED_BACKGROUND),
            ColorName::DarkOrange => (Color::Indexed(208), SHARED_BACKGROUND),
            ColorName::DarkGray => (Color::Indexed(237), SHARED_BACKGROUND),
            ColorName::LightGray => (Color::Indexed(244), SHARED_BACKGROUND),
            ColorName::BlueOnGray => (Color::Indexed(19), Color::Indexed(244)),
            ColorName::GrayOnBlue => (Color::Indexed(244), Color::Indexed(19)),
            ColorName::WhiteOnGray => (Color::White, Color::Indexed(234)),
            ColorName::GrayOnWhite => (Color::Indexed(236), Color::White),
        })
    }

    /// For terminals without color support: text stays white, highlights invert
    pub fn monochrome() -> Self {
        Self::from_colors(|color| match color {
            ColorName::BlueOnGray | ColorName::GrayOnWhite => (Color::Black, Color::White),
            ColorName::GrayOnBlue | ColorName::WhiteOnGray => (Color::White, Color::Black),
            _ => (Color::White, SHARED_BACKGROUND),
        })
    }

    /// Bright 16-color variant for accessibility
    pub fn high_contrast() -> Self {
        Self::from_colors(|color| match color {
            ColorName::Red => (Color::LightRed, SHARED_BACKGROUND),
            ColorName::Cyan => (Color::LightCyan, SHARED_BACKGROUND),
            ColorName::Green => (Color::LightGreen, SHARED_BACKGROUND),
            ColorName::Yellow => (Color::LightYellow, SHARED_BACKGROUND),
            ColorName::Magenta => (Color::LightMagenta, SHARED_BACKGROUND),
            ColorName::Blue => (Color::LightBlue, SHARED_BACKGROUND),
            ColorName::White => (Color::White, SHARED_BACKGROUND),
            ColorName::LightOrange | ColorName::DarkOrange => (Color::LightYellow, SHARED_BACKGROUND),
            ColorName::DarkGray | ColorName::LightGray => (Color::Gray, SHARED_BACKGROUND),
            ColorName::BlueOnGray => (Color::Black, Color::LightBlue),
            ColorName::GrayOnBlue => (Color::LightBlue, Color::Black),
            ColorName::WhiteOnGray => (Color::Black, Color::White),
            ColorName::GrayOnWhite => (Color::White, Color::Black),
        })
    }

    pub fn for_kind(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Standard => Self::standard(),
            PaletteKind::Monochrome => Self::monochrome(),
            PaletteKind::HighContrast => Self::high_contrast(),
        }
    }

    pub fn get(&self, color: ColorName) -> ColorPair {
        self.pairs[color.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPair> {
        self.pairs.iter()
    }

    fn from_colors(colors: impl Fn(ColorName) -> (Color, Color)) -> Self {
        let pairs = ColorName::ALL.map(|color| {
            let (fg, bg) = colors(color);
            ColorPair {
                id: color.id(),
                fg,
                bg,
            }
        });
        Self { pairs }
    }
}

/// Screen extent and the constants derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub rows: u16,
    pub cols: u16,
    pub menu_item_width: u16,
    pub max_menu_rows: u16,
}

impl ScreenLayout {
    pub fn new(rows: u16, cols: u16, config: &ScreenConfig) -> Self {
        Self {
            rows,
            cols,
            menu_item_width: cols.saturating_sub(config.menu_margin) / 3,
            max_menu_rows: config.max_menu_rows,
        }
    }
}

/// Palette plus layout, produced once per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub layout: ScreenLayout,
}

impl Theme {
    /// Hide the cursor, register the configured palette, set the background fill and
    /// derive the layout from the terminal size.
    pub fn initialize<B: TerminalBackend + ?Sized>(
        backend: &mut B,
        config: &ScreenConfig,
    ) -> Result<Self> {
        backend.init()?;

        let palette = Palette::for_kind(config.palette);
        for pair in palette.iter() {
            backend.register_color_pair(pair.id, pair.fg, pair.bg)?;
        }
        backend.set_background(' ', Attr::pair(ColorName::White.id()))?;

        let (rows, cols) = backend.size()?;
        let layout = ScreenLayout::new(rows, cols, config);
        log::debug!(
            "theme initialized: {:?} palette, {}x{} screen, menu item width {}",
            config.palette,
            rows,
            cols,
            layout.menu_item_width
        );

        Ok(Self { palette, layout })
    }
}
