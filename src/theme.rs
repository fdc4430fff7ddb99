//! Colors for CLI output.
//!
//! Centralizes the ANSI escape codes used by the progress reporter. A plain
//! theme emits no escape codes at all, for pipes and `NO_COLOR`.

/// Terminal colors used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
    DarkGray,
    /// No escape code.
    Plain,
}

impl Color {
    fn ansi(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Gray => "\x1b[37m",
            Color::DarkGray => "\x1b[90m",
            Color::Plain => "",
        }
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (file names, headings)
    pub text_primary: Color,
    /// Secondary/dimmed text color (per-block detail)
    pub text_secondary: Color,
    /// Warnings (stale or out-of-range line numbers, failed backup)
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            warning: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::Plain,
            text_secondary: Color::Plain,
            warning: Color::Plain,
            error: Color::Plain,
            success: Color::Plain,
        }
    }

    /// Colored theme when `enabled`, plain otherwise.
    pub fn for_output(enabled: bool) -> Self {
        if enabled {
            Self::default()
        } else {
            Self::plain()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        paint(self.warning, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Plain => text.to_string(),
        _ => format!("{}{}{}", color.ansi(), text, ANSI_RESET),
    }
}

/// Whether stdout should get colored output.
///
/// Off when `NO_COLOR` is set or stdout is not a terminal.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}
