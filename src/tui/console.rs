//! Line-based terminal I/O.
//!
//! A `Console` owns the single input reader for the whole session plus the
//! output writer. Every prompt writes its question, flushes, and blocks for
//! one line. Generic over `BufRead`/`Write` so tests can script a session
//! with an in-memory cursor.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

use crate::tui::style::{Painter, Tone};

pub struct Console<R, W> {
    input: R,
    out: W,
    painter: Painter,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, painter: Painter, clear_screen: bool) -> Self {
        Self {
            input,
            out,
            painter,
            clear_screen,
        }
    }

    pub fn painter(&self) -> Painter {
        self.painter
    }

    /// Everything written so far (tests read this back from a `Vec<u8>`).
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Prints `query` and returns the next input line without its terminator.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD rather than failing.
    /// End of input is an `UnexpectedEof` error: no further prompt can ever be
    /// answered, so the caller should stop.
    pub fn ask(&mut self, query: &str, tone: Tone) -> io::Result<String> {
        write!(self.out, "{}", self.painter.paint(query, tone))?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prints one line.
    pub fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        writeln!(self.out, "{}", self.painter.paint(text, tone))
    }

    /// Writes pre-styled text as-is.
    pub fn say_raw(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
