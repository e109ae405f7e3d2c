//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io::{BufRead, Cursor};
use tempfile::TempDir;

use crate::core::files::FileStore;
use crate::core::messages::Language;
use crate::tui::console::Console;
use crate::tui::flows::FileManager;
use crate::tui::style::Painter;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// A store rooted in a fresh temporary directory. Keep the `TempDir` alive.
pub fn temp_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FileStore::new(dir.path());
    (dir, store)
}

/// A console that answers prompts with `lines`, in order, with styling and
/// screen clearing turned off.
pub fn scripted_console(lines: &[&str]) -> ScriptedConsole {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    Console::new(Cursor::new(input.into_bytes()), Vec::new(), Painter::plain(), false)
}

/// A Spanish-language manager over `store` fed by `lines`.
pub fn scripted_manager(
    store: FileStore,
    lines: &[&str],
) -> FileManager<Cursor<Vec<u8>>, Vec<u8>> {
    FileManager::new(scripted_console(lines), store, Language::Es.messages())
}

pub fn output_text<R: BufRead>(console: &Console<R, Vec<u8>>) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
