//! # curse-screen - terminal screen layer for curses-style menus
//!
//! Owns the visible terminal surface and provides what list menus build on:
//!
//! - **Styled drawing**: plain, bold, highlighted and palette-colored text, each
//!   write immediately visible
//! - **Context registers**: a fixed number of addressable screen snapshots
//! - **Context stack**: nested save/restore of screen snapshots
//! - **Scrollbars**: proportional track/thumb geometry for windows over long lists
//!
//! ## Architecture
//!
//! - [`error`] - Error type and `Result` alias
//! - [`config`] - Screen configuration (TOML file behind the `config` feature)
//! - [`backend`] - Terminal capability trait, in-memory surface and snapshots
//! - [`input`] - Key sources for the backends
//! - [`theme`] - Palette and derived layout
//! - [`render`] - Drawing primitives
//! - [`context`] - Register store and context stack
//! - [`scrollbar`] - Scrollbar geometry
//! - [`screen`] - The `Screen` facade used by menu code

pub mod error;
pub mod config;

pub mod backend;
pub mod input;

pub mod theme;
pub mod render;
pub mod context;
pub mod scrollbar;

pub mod screen;

pub use error::{Result, ScreenError};

pub use backend::{
    Attr, CellPos, CrosstermTerminal, HeadlessTerminal, PairId, ScreenSnapshot, TerminalBackend,
};
pub use config::ScreenConfig;
pub use context::{ContextOutcome, ContextStack, RegisterStore};
pub use render::Renderer;
pub use screen::Screen;
pub use scrollbar::ScrollbarGeometry;
pub use theme::{ColorName, Palette, PaletteKind};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
