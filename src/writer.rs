use std::io::{self, Write};

/// Menu writer for formatted output with ANSI support
pub struct MenuWriter<'a, W: Write> {
    writer: &'a mut W,
    ansi_enabled: bool,
}

impl<'a, W: Write> MenuWriter<'a, W> {
    /// Create a new menu writer
    pub fn new(writer: &'a mut W, ansi_enabled: bool) -> Self {
        Self {
            writer,
            ansi_enabled,
        }
    }

    /// Write a string
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    /// Write the line shown above the list of actions
    pub fn write_header(&mut self, header: &str, color: u8) -> io::Result<()> {
        self.write_banner(header, color)
    }

    /// Write the line asking for a choice, then flush so it is visible
    /// before the read blocks
    pub fn write_prompt(&mut self, prompt: &str, color: u8) -> io::Result<()> {
        self.write_banner(prompt, color)?;
        self.flush()
    }

    /// Write one `name: description` line, padding the name to `width` characters
    pub fn write_entry(&mut self, name: &str, description: &str, width: usize) -> io::Result<()> {
        let padding = width.saturating_sub(name.chars().count());
        self.set_bold(true)?;
        self.write_str(name)?;
        self.set_bold(false)?;
        write!(self.writer, "{:padding$}: {}", "", description, padding = padding)?;
        self.write_str("\n")
    }

    fn write_banner(&mut self, text: &str, color: u8) -> io::Result<()> {
        self.set_bold(true)?;
        self.write_colored(text, color)?;
        self.write_str("\n")
    }

    /// Set text color (ANSI colors: 0-7 for basic colors, 8-15 for bright colors)
    pub fn set_color(&mut self, color: u8) -> io::Result<()> {
        if !self.ansi_enabled {
            return Ok(());
        }
        if color < 8 {
            write!(self.writer, "\x1b[3{}m", color)
        } else {
            write!(self.writer, "\x1b[9{}m", color - 8)
        }
    }

    /// Reset text formatting
    pub fn reset_format(&mut self) -> io::Result<()> {
        if self.ansi_enabled {
            self.write_str("\x1b[0m")
        } else {
            Ok(())
        }
    }

    /// Set bold text
    pub fn set_bold(&mut self, enable: bool) -> io::Result<()> {
        if !self.ansi_enabled {
            return Ok(());
        }
        if enable {
            self.write_str("\x1b[1m")
        } else {
            self.write_str("\x1b[22m")
        }
    }

    /// Write colored text
    pub fn write_colored(&mut self, text: &str, color: u8) -> io::Result<()> {
        self.set_color(color)?;
        self.write_str(text)?;
        self.reset_format()
    }

    /// Flush the writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// ANSI color codes for convenience
pub mod colors {
    pub const BLACK: u8 = 0;
    pub const RED: u8 = 1;
    pub const GREEN: u8 = 2;
    pub const YELLOW: u8 = 3;
    pub const BLUE: u8 = 4;
    pub const MAGENTA: u8 = 5;
    pub const CYAN: u8 = 6;
    pub const WHITE: u8 = 7;

    pub const BRIGHT_BLACK: u8 = 8;
    pub const BRIGHT_RED: u8 = 9;
    pub const BRIGHT_GREEN: u8 = 10;
    pub const BRIGHT_YELLOW: u8 = 11;
    pub const BRIGHT_BLUE: u8 = 12;
    pub const BRIGHT_MAGENTA: u8 = 13;
    pub const BRIGHT_CYAN: u8 = 14;
    pub const BRIGHT_WHITE: u8 = 15;
}
