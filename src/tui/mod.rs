//! # TUI Adapter
//!
//! The terminal-specific layer: line prompts, ANSI styling, screen clearing,
//! and the menu loop that turns keys into file operations.
//!
//! This is the only module that knows about crossterm. The terminal stays in
//! normal (cooked) mode the whole time, so Ctrl-C is delivered as a signal
//! and ends the process directly; there is no terminal state to restore.

pub mod console;
pub mod flows;
pub mod style;
pub mod ui;

use log::{info, warn};
use std::io;

use crate::core::config::ResolvedConfig;
use crate::core::files::FileStore;
use crate::tui::console::Console;
use crate::tui::flows::FileManager;
use crate::tui::style::Painter;

pub use flows::Outcome;

/// Runs the menu on stdin/stdout against `./files` until input ends.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let store = FileStore::default();
    if !store.root_exists() {
        warn!(
            "{} does not exist or is not a directory; listings will fail",
            store.root().display()
        );
    }

    let console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        Painter::new(config.color),
        config.clear_screen,
    );
    let mut manager = FileManager::new(console, store, config.language.messages());
    info!(
        "Menu started (language: {}, color: {}, clear_screen: {})",
        config.language, config.color, config.clear_screen
    );
    manager.run()
}
