//! # Menu Loop and Flows
//!
//! One `FileManager` drives the whole session. Each menu choice runs one
//! flow to completion as a plain sequence of blocking calls:
//!
//! ```text
//! menu ──L──▶ list → name → read          → ack
//!      ──E──▶ list → name → exists? → text → write  → ack
//!      ──C──▶        name → exists? → text → write  → ack
//!      ──B──▶ list → name → exists? → confirm → remove → ack
//! ```
//!
//! An empty name returns straight to the menu. Filesystem failures are
//! printed and logged here and never leave the flow; only terminal I/O
//! errors propagate out.

use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

use crate::core::files::{FileStore, FsError};
use crate::core::menu::{self, MenuChoice, MenuOption};
use crate::core::messages::Messages;
use crate::tui::console::Console;
use crate::tui::style::Tone;
use crate::tui::ui;

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty file name; nothing was touched.
    Aborted,
    /// File contents were displayed.
    Shown,
    Saved,
    Deleted,
    /// Delete was not confirmed.
    Kept,
    /// Edit or delete of a name that does not exist.
    Missing,
    /// Create of a name that already exists.
    Conflict,
    /// The filesystem operation failed and the error was shown.
    Failed,
}

pub struct FileManager<R, W> {
    console: Console<R, W>,
    store: FileStore,
    messages: &'static Messages,
    options: Vec<MenuOption>,
}

impl<R: BufRead, W: Write> FileManager<R, W> {
    pub fn new(console: Console<R, W>, store: FileStore, messages: &'static Messages) -> Self {
        Self {
            console,
            store,
            messages,
            options: menu::options(messages),
        }
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Shows the menu and runs flows until input ends or the terminal fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.step()?;
        }
    }

    /// One menu iteration. `None` means the menu is simply redrawn.
    pub fn step(&mut self) -> io::Result<Option<Outcome>> {
        ui::draw_menu(&mut self.console, self.messages, &self.options)?;
        let key = self.console.ask(self.messages.choose_option, Tone::Plain)?;
        let choice = MenuChoice::from_input(&key);
        debug!("Menu input {:?} -> {:?}", key, choice);

        let outcome = match choice {
            MenuChoice::Read => self.read_flow()?,
            MenuChoice::Edit => self.edit_flow()?,
            MenuChoice::Create => self.create_flow()?,
            MenuChoice::Delete => self.delete_flow()?,
            MenuChoice::Redisplay => return Ok(None),
        };
        info!("{:?} flow finished: {:?}", choice, outcome);
        Ok(Some(outcome))
    }

    pub fn read_flow(&mut self) -> io::Result<Outcome> {
        ui::draw_heading(&mut self.console, self.messages.read_title)?;
        self.show_listing()?;
        let Some(name) = self.ask_name(self.messages.ask_read_name)? else {
            return Ok(Outcome::Aborted);
        };

        let outcome = match self.store.read(&name) {
            Ok(contents) => {
                let header = self.messages.contents_header(&name);
                self.console.say(&header, Tone::Header)?;
                self.console.say(&contents, Tone::Body)?;
                Outcome::Shown
            }
            Err(e) => self.report(&e, self.messages.read_failed)?,
        };
        self.acknowledge()?;
        Ok(outcome)
    }

    pub fn edit_flow(&mut self) -> io::Result<Outcome> {
        ui::draw_heading(&mut self.console, self.messages.edit_title)?;
        self.show_listing()?;
        let Some(name) = self.ask_name(self.messages.ask_edit_name)? else {
            return Ok(Outcome::Aborted);
        };

        if !self.store.exists(&name) {
            self.console.say(self.messages.missing, Tone::Error)?;
            self.acknowledge()?;
            return Ok(Outcome::Missing);
        }
        self.save(&name)
    }

    pub fn create_flow(&mut self) -> io::Result<Outcome> {
        ui::draw_heading(&mut self.console, self.messages.create_title)?;
        let Some(name) = self.ask_name(self.messages.ask_create_name)? else {
            return Ok(Outcome::Aborted);
        };

        if self.store.exists(&name) {
            self.console.say(self.messages.already_exists, Tone::Error)?;
            self.acknowledge()?;
            return Ok(Outcome::Conflict);
        }
        self.save(&name)
    }

    pub fn delete_flow(&mut self) -> io::Result<Outcome> {
        ui::draw_heading(&mut self.console, self.messages.delete_title)?;
        self.show_listing()?;
        let Some(name) = self.ask_name(self.messages.ask_delete_name)? else {
            return Ok(Outcome::Aborted);
        };

        if !self.store.exists(&name) {
            self.console.say(self.messages.missing, Tone::Error)?;
            self.acknowledge()?;
            return Ok(Outcome::Missing);
        }

        let question = self.messages.confirm_delete(&name);
        let answer = self.console.ask(&question, Tone::Note)?;
        if !self.messages.is_affirmative(&answer) {
            debug!("Delete of {} not confirmed ({:?})", name, answer);
            return Ok(Outcome::Kept);
        }

        let outcome = match self.store.remove(&name) {
            Ok(()) => {
                self.console.say(self.messages.deleted, Tone::Success)?;
                Outcome::Deleted
            }
            Err(e) => self.report(&e, self.messages.delete_failed)?,
        };
        self.acknowledge()?;
        Ok(outcome)
    }

    /// Asks for one line of content and writes it over `name`.
    fn save(&mut self, name: &str) -> io::Result<Outcome> {
        let contents = self.console.ask(self.messages.ask_content, Tone::Note)?;
        let outcome = match self.store.write(name, &contents) {
            Ok(()) => {
                self.console.say(self.messages.saved, Tone::Success)?;
                Outcome::Saved
            }
            Err(e) => self.report(&e, self.messages.write_failed)?,
        };
        self.acknowledge()?;
        Ok(outcome)
    }

    /// Prints every entry name; a listing failure is printed in its place.
    fn show_listing(&mut self) -> io::Result<()> {
        match self.store.list() {
            Ok(names) => {
                for name in names {
                    self.console.say(&name, Tone::Plain)?;
                }
            }
            Err(e) => {
                warn!("{}", e);
                let line = format!("{}{}", self.messages.list_failed, e.io_error());
                self.console.say(&line, Tone::Plain)?;
            }
        }
        Ok(())
    }

    /// Trimmed file name, or `None` when the answer is blank.
    fn ask_name(&mut self, query: &str) -> io::Result<Option<String>> {
        let name = self.console.ask(query, Tone::Ask)?;
        let name = name.trim();
        if name.is_empty() {
            debug!("Empty file name, back to menu");
            return Ok(None);
        }
        Ok(Some(name.to_string()))
    }

    fn report(&mut self, error: &FsError, message: &str) -> io::Result<Outcome> {
        warn!("{}", error);
        self.console.say(message, Tone::Error)?;
        Ok(Outcome::Failed)
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        self.console.ask(self.messages.press_enter, Tone::Note)?;
        Ok(())
    }
}
