//! Console markers and styling shared by the menus and reports

use std::fmt;

use console::style;

/// Line prefix identifying the kind of console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `[+]` result or menu entry
    Info,
    /// `[#]` request for input
    Prompt,
    /// `[!]` recoverable problem with the user's input
    Warning,
    /// `[0]` exit confirmation
    Exit,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Info => "[+]",
            Marker::Prompt => "[#]",
            Marker::Warning => "[!]",
            Marker::Exit => "[0]",
        }
    }

    /// Render the marker, colored only when `color` is set
    pub fn styled(self, color: bool) -> impl fmt::Display {
        let styled = style(self.as_str()).force_styling(color);
        match self {
            Marker::Info => styled.green().bold(),
            Marker::Prompt => styled.cyan().bold(),
            Marker::Warning => styled.yellow().bold(),
            Marker::Exit => styled.magenta().bold(),
        }
    }
}

/// Whether stdout should receive ANSI colors
pub fn stdout_supports_color() -> bool {
    console::colors_enabled()
}

/// Format a float with a fixed number of decimals
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}
