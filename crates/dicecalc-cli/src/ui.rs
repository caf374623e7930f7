//! Styled status lines for the console.
//!
//! Results go to stdout; warnings and errors go to stderr so that `-q`
//! output stays machine-readable.

use console::{style, StyledObject};

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The simulated estimate agrees with the exact value.
    Ok,
    /// Recoverable problem, such as a failed cross-check.
    Warn,
    /// A run or the whole invocation failed.
    Error,
}

impl Status {
    /// Bracketed tag printed before the message.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn paint(self, tag: &'static str) -> StyledObject<&'static str> {
        let styled = style(tag).bold();
        match self {
            Self::Ok => styled.green(),
            Self::Warn => styled.yellow(),
            Self::Error => styled.red(),
        }
    }

    /// The full status line, coloured only when `color` is set.
    #[must_use]
    pub fn render(self, text: &str, color: bool) -> String {
        if color {
            format!("{} {text}", self.paint(self.tag()))
        } else {
            format!("{} {text}", self.tag())
        }
    }

    fn to_stderr(self) -> bool {
        !matches!(self, Self::Ok)
    }
}

/// Colour is on unless `NO_COLOR` is set.
#[must_use]
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a status line to stdout (`Ok`) or stderr (`Warn`, `Error`).
pub fn print_status(status: Status, text: &str) {
    let line = status.render(text, color_enabled());
    if status.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Print a section header such as `=== Cross-validation ===`.
pub fn print_header(text: &str) {
    let line = format!("=== {text} ===");
    if color_enabled() {
        println!("{}", style(line).bold().cyan());
    } else {
        println!("{line}");
    }
}
