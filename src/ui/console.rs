//! # Console Renderer
//!
//! ANSI-colorized output with automatic terminal detection. When stdout is
//! not a terminal the renderer degrades to plain text.

use std::io::{self, IsTerminal, Write};

/// ANSI colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Renders game output to the console.
///
/// # Examples
///
/// ```
/// use wayfarer::ConsoleRenderer;
///
/// let renderer = ConsoleRenderer::with_color(false);
/// renderer.info("plain text, no escape codes");
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    use_color: bool,
}

impl ConsoleRenderer {
    /// Creates a renderer, enabling color only when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            use_color: io::stdout().is_terminal(),
        }
    }

    /// Creates a renderer with color explicitly on or off.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            format!("{}{}{}", color.code(), text, RESET)
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.use_color {
            format!("{}{}{}", BOLD, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Prints a success line in green.
    pub fn success(&self, message: &str) {
        println!("{}", self.paint(message, Color::Green));
    }

    /// Prints a failure line in red.
    pub fn error(&self, message: &str) {
        println!("{}", self.paint(message, Color::Red));
    }

    /// Prints a neutral line.
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a sequence of event lines.
    pub fn events(&self, lines: &[String]) {
        for line in lines {
            self.info(line);
        }
    }

    /// Prints a scene description, with the title line emphasized.
    pub fn scene(&self, description: &str) {
        println!();
        for (index, line) in description.lines().enumerate() {
            if index == 0 {
                println!("{}", self.paint_bold(&self.paint(line, Color::Cyan)));
            } else {
                println!("{}", line);
            }
        }
    }

    /// Prints the player status sheet.
    pub fn status(&self, summary: &str) {
        println!();
        println!("{}", summary);
    }

    /// Prints combat information in warning yellow.
    pub fn combat(&self, summary: &str) {
        println!();
        for line in summary.lines() {
            println!("{}", self.paint(line, Color::Yellow));
        }
    }

    /// Prints the command prompt and flushes it out.
    pub fn prompt(&self) {
        print!("> ");
        let _ = io::stdout().flush();
    }

    /// Prints the welcome banner.
    pub fn welcome(&self) {
        let banner = r#"
+---------------------------------------------------------+
|                                                         |
|            W A Y F A R E R                              |
|            a turn-based text adventure                  |
|                                                         |
|   Explore, gather, fight, and grow stronger.            |
|   Type 'help' for the list of commands.                 |
|                                                         |
+---------------------------------------------------------+"#;
        println!("{}", self.paint(banner, Color::Cyan));
    }

    /// Prints the command reference.
    pub fn help(&self) {
        let help = "\
Commands:
  north/n, south/s, east/e, west/w   move between scenes
  look, l                            describe the current scene
  inventory, i                       list carried items
  status, stat                       show the full status sheet
  pick <item>, take <item>           pick up an item
  drop <item>                        drop an item here
  use <item>                         consume a usable item
  equip <item> <slot>                wear an item (weapon/armor/helmet/boots)
  unequip <slot>                     take a worn item off
  save [file], load [file]           save or restore progress
  help                               this text
  quit, exit                         leave the game";
        println!("{}", help);
    }

    /// Prints the goodbye line.
    pub fn goodbye(&self) {
        println!("{}", self.paint("Farewell, wayfarer.", Color::Cyan));
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
