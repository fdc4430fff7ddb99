//! Human-readable progress output.
//!
//! Every action the tool takes is announced as one line of text. The
//! reporter owns the output stream so tests can capture it in a buffer.

use std::io::{self, Write};

use crate::theme::{color_enabled, Theme};

/// Writes themed status lines to an output stream.
pub struct Reporter {
    out: Box<dyn Write>,
    theme: Theme,
}

impl Reporter {
    pub fn new(out: Box<dyn Write>, theme: Theme) -> Self {
        Self { out, theme }
    }

    /// Reporter on stdout, colored when stdout is a terminal and `no_color` is false.
    pub fn stdout(no_color: bool) -> Self {
        Self::new(
            Box::new(io::stdout()),
            Theme::for_output(!no_color && color_enabled()),
        )
    }

    pub fn info(&mut self, text: &str) {
        let line = self.theme.primary_text(text);
        self.emit(&line);
    }

    /// Indented detail under the previous line.
    pub fn detail(&mut self, text: &str) {
        let line = self.theme.secondary_text(&format!("   {}", text));
        self.emit(&line);
    }

    pub fn success(&mut self, text: &str) {
        let line = self.theme.success_text(text);
        self.emit(&line);
    }

    pub fn warning(&mut self, text: &str) {
        let line = self.theme.warning_text(text);
        self.emit(&line);
    }

    pub fn error(&mut self, text: &str) {
        let line = self.theme.error_text(text);
        self.emit(&line);
    }

    pub fn blank(&mut self) {
        self.emit("");
    }

    /// Uncolored output, for machine-readable text.
    pub fn raw(&mut self, text: &str) {
        self.emit(text);
    }

    /// Write one line, ignoring write errors.
    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }
}
