/// Terminal output context that handles colors and buffering
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Write};

pub struct TerminalContext<W: Write = io::Stdout> {
    out: W,
    colors: bool,
}

impl TerminalContext {
    pub fn stdout() -> Self {
        Self { out: io::stdout(), colors: true }
    }
}

impl<W: Write> TerminalContext<W> {
    /// Plain writer, no escape sequences
    pub fn plain(out: W) -> Self {
        Self { out, colors: false }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print a colored line
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.colors {
            self.out.queue(SetForegroundColor(color.into()))?;
        }
        writeln!(self.out, "{}", text)?;
        if self.colors {
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_escapes() {
        let mut ctx = TerminalContext::plain(Vec::new());
        ctx.print_colored_line("boo", TerminalColor::Red).unwrap();
        ctx.empty_line().unwrap();
        ctx.print_line("done").unwrap();

        let text = String::from_utf8(ctx.into_inner()).unwrap();
        assert_eq!(text, "boo\n\ndone\n");
    }
}
