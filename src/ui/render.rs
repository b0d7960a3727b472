//! Rendering contract and the default stderr renderer.
//!
//! stdout carries delivered commands (`--print`, `>show`), so every status
//! line here goes to stderr.

use crossterm::style::{Color, Stylize};

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const INDENT_1: &str = "  ";

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
}

/// Default terminal renderer writing to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn warn_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold())
        } else {
            format!("{LABEL_WARNING} {msg}")
        }
    }

    fn error_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_ERROR.with(Color::Red).bold())
        } else {
            format!("{LABEL_ERROR} {msg}")
        }
    }

    fn field_line(&self, key: &str, value: &str) -> String {
        if self.color {
            format!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White)
            )
        } else {
            format!("{INDENT_1}{key}: {value}")
        }
    }

    fn detail_line(&self, text: &str) -> String {
        if self.color {
            format!("{INDENT_1}{}", text.with(Color::DarkGrey))
        } else {
            format!("{INDENT_1}{text}")
        }
    }
}

impl RenderSink for Renderer {
    fn warn(&self, msg: &str) {
        eprintln!("{}", self.warn_line(msg));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", self.error_line(msg));
    }

    fn field(&self, key: &str, value: &str) {
        eprintln!("{}", self.field_line(key, value));
    }

    fn detail(&self, text: &str) {
        eprintln!("{}", self.detail_line(text));
    }
}
