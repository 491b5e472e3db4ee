//! ANSI styling for line colors and headings.

use std::env;

/// Escape sequences used by the CLI.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bold bright white, for station names and branch headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RED: &str = "\x1b[31m";
    /// 256-color orange.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Line family to escape sequence.
const LINE_COLORS: [(&str, &str); 4] = [
    ("red", colors::RED),
    ("orange", colors::ORANGE),
    ("blue", colors::BLUE),
    ("green", colors::GREEN),
];

/// Resolved styling: real escape codes, or empty strings when color is off.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    enabled: bool,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            enabled: false,
        }
    }

    /// Colored unless the environment opts out (see [`supports_color`]).
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Escape code for a line label such as `red` or `green-B`. Unknown
    /// families and plain palettes yield an empty string.
    #[must_use]
    pub fn line(&self, label: &str) -> &'static str {
        if !self.enabled {
            return "";
        }
        let family = label.split('-').next().unwrap_or(label).to_ascii_lowercase();
        LINE_COLORS
            .iter()
            .find(|(name, _)| *name == family)
            .map_or("", |(_, code)| code)
    }

    /// `label` wrapped in its line color.
    #[must_use]
    pub fn paint_line(&self, label: &str) -> String {
        match self.line(label) {
            "" => label.to_string(),
            code => format!("{code}{label}{}", self.reset),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether stdout styling is allowed, honoring `NO_COLOR` and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(env::var_os("NO_COLOR").is_some(), env::var("TERM").ok().as_deref())
}

fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
