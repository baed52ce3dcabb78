//! curse-screen - interactive demo of the screen layer.
//!
//! Draws a scrolling list menu on the real terminal and wires the context register
//! and context stack operations to keys.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use curse_screen::{
    CellPos, ColorName, ContextOutcome, CrosstermTerminal, PaletteKind, Screen, ScreenConfig,
};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;

const MENU_TOP: u16 = 2;
const MENU_LEFT: u16 = 2;

/// What the next digit key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    SaveRegister,
    RestoreRegister,
}

struct MenuState {
    items: Vec<String>,
    top: usize,
    selected: usize,
    visible: usize,
}

impl MenuState {
    fn new(count: usize, visible: usize) -> Self {
        Self {
            items: (1..=count).map(|n| format!("Task {n:03}")).collect(),
            top: 0,
            selected: 0,
            visible: visible.max(1),
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + self.visible {
            self.top = self.selected + 1 - self.visible;
        }
    }

    fn window_end(&self) -> usize {
        (self.top + self.visible).min(self.items.len())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("curse-screen")
        .version(curse_screen::VERSION)
        .about("Interactive demo of the curse-screen terminal layer")
        .long_about(
            "Draws a scrolling task menu. j/k or arrows move, s pushes the screen, \
             r pops it, m<digit> saves into a register, '<digit> restores one, q quits.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Read screen settings from this TOML file"),
        )
        .arg(
            Arg::new("registers")
                .long("registers")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of context registers"),
        )
        .arg(
            Arg::new("rows")
                .long("rows")
                .value_name("N")
                .value_parser(value_parser!(u16))
                .help("Scrollbar track length"),
        )
        .arg(
            Arg::new("palette")
                .long("palette")
                .value_name("NAME")
                .value_parser(["standard", "monochrome", "high-contrast"])
                .help("Palette preset"),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("60")
                .help("Number of menu entries to generate"),
        )
        .get_matches();

    let mut config = load_config(matches.get_one::<PathBuf>("config"))?;
    if let Some(&registers) = matches.get_one::<usize>("registers") {
        config.context_registers = registers;
    }
    if let Some(&rows) = matches.get_one::<u16>("rows") {
        config.max_menu_rows = rows;
    }
    if let Some(name) = matches.get_one::<String>("palette") {
        config.palette = name.parse::<PaletteKind>()?;
    }
    let item_count = matches.get_one::<usize>("items").copied().unwrap_or(60);

    let backend = CrosstermTerminal::stdout().context("failed to open terminal")?;
    let mut screen = Screen::initialize(backend, &config).context("failed to set up screen")?;

    // The terminal is handed back when `screen` drops, before any error is printed.
    let result = run(&mut screen, item_count);
    drop(screen);
    result
}

#[cfg(feature = "config")]
fn load_config(path: Option<&PathBuf>) -> Result<ScreenConfig> {
    let config = match path {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::load_default()?,
    };
    Ok(config)
}

#[cfg(not(feature = "config"))]
fn load_config(path: Option<&PathBuf>) -> Result<ScreenConfig> {
    if path.is_some() {
        anyhow::bail!("built without the `config` feature; --config is unavailable");
    }
    Ok(ScreenConfig::default())
}

fn run(screen: &mut Screen<CrosstermTerminal>, item_count: usize) -> Result<()> {
    let visible = usize::from(
        screen
            .layout()
            .max_menu_rows
            .min(screen.rows().saturating_sub(MENU_TOP + 2)),
    );
    let mut menu = MenuState::new(item_count, visible);
    let mut pending = Pending::None;
    let mut status = String::from("j/k move  s save  r restore  m<n> mark  '<n> jump  q quit");

    screen.clear()?;
    draw_menu(screen, &menu, &status)?;

    loop {
        let key = screen.get_character()?;
        if let KeyCode::Char(digit @ '0'..='9') = key.code {
            if pending != Pending::None {
                let index = digit as isize - '0' as isize;
                status = match pending {
                    Pending::SaveRegister => {
                        let outcome = screen.save_in_register(index);
                        describe(outcome, &format!("saved in register {index}"))
                    }
                    _ => {
                        let outcome = screen.restore_register(index)?;
                        describe(outcome, &format!("restored register {index}"))
                    }
                };
                pending = Pending::None;
                draw_status(screen, &status)?;
                continue;
            }
        }
        pending = Pending::None;

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => menu.move_by(1),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => menu.move_by(-1),
            (KeyCode::PageDown, _) => menu.move_by(menu.visible as isize),
            (KeyCode::PageUp, _) => menu.move_by(-(menu.visible as isize)),
            (KeyCode::Char('s'), _) => {
                screen.save();
                status = format!("pushed screen, depth {}", screen.stack().len());
                draw_status(screen, &status)?;
                continue;
            }
            (KeyCode::Char('r'), _) => {
                let outcome = screen.restore()?;
                status = describe(outcome, "popped screen");
                draw_status(screen, &status)?;
                continue;
            }
            (KeyCode::Char('m'), _) => {
                pending = Pending::SaveRegister;
                continue;
            }
            (KeyCode::Char('\''), _) => {
                pending = Pending::RestoreRegister;
                continue;
            }
            _ => continue,
        }
        draw_menu(screen, &menu, &status)?;
    }

    Ok(())
}

fn describe(outcome: ContextOutcome, success: &str) -> String {
    match outcome {
        ContextOutcome::Success => success.to_string(),
        ContextOutcome::InvalidIndex => "no such register".to_string(),
        ContextOutcome::InactiveSlot => "register is empty".to_string(),
        ContextOutcome::EmptyStack => "nothing saved".to_string(),
    }
}

fn draw_menu(screen: &mut Screen<CrosstermTerminal>, menu: &MenuState, status: &str) -> Result<()> {
    screen.erase()?;
    screen.display_bold("Tasks", CellPos::new(0, MENU_LEFT))?;

    let width = usize::from(screen.menu_item_width().max(12));
    for (offset, item) in menu.items[menu.top..menu.window_end()].iter().enumerate() {
        let row = MENU_TOP + offset as u16;
        let text = format!("{item:<width$}");
        if menu.top + offset == menu.selected {
            screen.highlight(&text, CellPos::new(row, MENU_LEFT))?;
        } else {
            screen.display(&text, CellPos::new(row, MENU_LEFT))?;
        }
    }

    let column = screen.cols().saturating_sub(2);
    screen.scroll_bar(
        CellPos::new(MENU_TOP, column),
        menu.top..menu.window_end(),
        menu.items.len(),
        Some(menu.visible as u16),
    )?;
    draw_status(screen, status)
}

fn draw_status(screen: &mut Screen<CrosstermTerminal>, status: &str) -> Result<()> {
    let row = screen.rows().saturating_sub(1);
    let blank = " ".repeat(usize::from(screen.cols()));
    screen.display(&blank, CellPos::new(row, 0))?;
    screen.display_custom_color(status, ColorName::LightGray, CellPos::new(row, 0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!curse_screen::VERSION.is_empty());
    }

    #[test]
    fn test_menu_scrolls_with_selection() {
        let mut menu = MenuState::new(10, 4);
        menu.move_by(5);
        assert_eq!(menu.selected, 5);
        assert_eq!(menu.top, 2);
        assert_eq!(menu.window_end(), 6);

        menu.move_by(-4);
        assert_eq!(menu.top, 1);

        menu.move_by(100);
        assert_eq!(menu.selected, 9);
        assert_eq!(menu.window_end(), 10);
    }
}
