//! Terminal styling and color utilities.

/// ANSI escape codes used by the map renderer.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the start cell.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the end cell.
    pub const TAG_END: &str = "\x1b[1;7;35m";
    /// Bright bold white for path cells.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for impassable cells.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for open cells off the path.
    pub const CYAN: &str = "\x1b[36m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is
/// disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub path: &'static str,
    pub wall: &'static str,
    pub open: &'static str,
}

impl ColorPalette {
    /// Palette with ANSI colors.
    pub fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::TAG_START,
            end: colors::TAG_END,
            path: colors::WHITE_BOLD,
            wall: colors::GRAY,
            open: colors::CYAN,
        }
    }

    /// Palette with every code empty.
    pub fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            end: "",
            path: "",
            wall: "",
            open: "",
        }
    }

    /// Pick a palette from the environment, see [`supports_color`].
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check if the terminal supports colored output.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
