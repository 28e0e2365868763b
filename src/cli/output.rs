//! Step-by-step status lines for the one-shot commands.

use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}

/// Writes status lines to any sink; stdout in the binary, a buffer in tests.
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Title over a double rule.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "═".repeat(RULE_WIDTH))
    }

    pub fn step(&mut self, icon: &str, message: &str) -> io::Result<()> {
        writeln!(self.out, "  {icon} {message}")
    }

    /// A line without newline that [`Console::done`] overwrites.
    pub fn pending(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "  … {message}")?;
        self.out.flush()
    }

    pub fn done(&mut self, icon: &str, message: &str) -> io::Result<()> {
        write!(self.out, "\r{}\r", " ".repeat(RULE_WIDTH))?;
        self.step(icon, message)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "─".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_header_underlines_title() {
        let mut console = Console::new(Vec::new());
        console.header("JOBBOT SUBMIT").unwrap();
        let text = written(console);
        assert!(text.contains("JOBBOT SUBMIT\n"));
        assert!(text.contains(&"═".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_done_overwrites_pending_line() {
        let mut console = Console::new(Vec::new());
        console.pending("Running bot...").unwrap();
        console.done(icons::SUCCESS, "finished").unwrap();
        let text = written(console);
        let last = text.rsplit('\r').next().unwrap();
        assert_eq!(last, "  ✓ finished\n");
    }
}
