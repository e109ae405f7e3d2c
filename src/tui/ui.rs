use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

use crate::core::menu::MenuOption;
use crate::core::messages::Messages;
use crate::tui::console::Console;
use crate::tui::style::{Painter, Tone};

/// Draws each option in its own box, all boxes sized to the widest caption.
///
/// ```text
/// ┌───────────────┐
/// │ L: Leer       │
/// └───────────────┘
/// ```
pub fn option_boxes(options: &[MenuOption], painter: Painter) -> Vec<String> {
    let captions: Vec<String> = options.iter().map(MenuOption::caption).collect();
    let width = captions.iter().map(|c| c.width()).max().unwrap_or(0);
    let rule = "─".repeat(width + 2);

    let mut lines = Vec::with_capacity(captions.len() * 3);
    for caption in &captions {
        let padding = " ".repeat(width - caption.width());
        lines.push(painter.paint(&format!("┌{rule}┐"), Tone::Border));
        lines.push(format!(
            "{}{}{}{}",
            painter.paint("│ ", Tone::Border),
            painter.paint(caption, Tone::Caption),
            padding,
            painter.paint(" │", Tone::Border),
        ));
        lines.push(painter.paint(&format!("└{rule}┘"), Tone::Border));
    }
    lines
}

/// Clears the screen and draws the title and option boxes.
pub fn draw_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &Messages,
    options: &[MenuOption],
) -> io::Result<()> {
    console.clear()?;
    console.say(messages.app_title, Tone::AppTitle)?;
    for line in option_boxes(options, console.painter()) {
        console.say_raw(&line)?;
    }
    Ok(())
}

/// Clears the screen and prints a flow heading followed by a blank line.
pub fn draw_heading<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
) -> io::Result<()> {
    console.clear()?;
    console.say(title, Tone::Heading)?;
    console.say("", Tone::Plain)
}
