use std::{borrow::Cow, io, str::FromStr};

use crate::config::ConfigError;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    #[default]
    Automatic,
    Always,
    Never,
}

impl FromStr for ColorSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(ColorSetting::Automatic),
            "always" => Ok(ColorSetting::Always),
            "never" => Ok(ColorSetting::Never),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const WHITE: &str = "\x1b[37m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BOLD_RED: &str = "\x1b[1;31m";
    pub const BOLD_GREEN: &str = "\x1b[1;32m";
    pub const BOLD_YELLOW: &str = "\x1b[1;33m";
    pub const BOLD_CYAN: &str = "\x1b[1;36m";
    pub const BOLD_WHITE: &str = "\x1b[1;37m";
}

/// Symbolic colors the explain output is drawn with.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    #[default]
    White,
    Green,
    Red,
    BoldRed,
    BoldGreen,
    BoldYellow,
    BoldWhite,
    BoldCyan,
}

impl Color {
    pub const fn escape(self) -> &'static str {
        use colors::*;
        match self {
            Color::White => WHITE,
            Color::Green => GREEN,
            Color::Red => RED,
            Color::BoldRed => BOLD_RED,
            Color::BoldGreen => BOLD_GREEN,
            Color::BoldYellow => BOLD_YELLOW,
            Color::BoldWhite => BOLD_WHITE,
            Color::BoldCyan => BOLD_CYAN,
        }
    }

    /// Wrap `text` in this color's escape sequence, or hand it back untouched.
    pub fn wrap(self, text: &str, use_color: bool) -> Cow<'_, str> {
        match use_color {
            true => Cow::Owned(format!("{}{text}{}", self.escape(), colors::RESET)),
            false => Cow::Borrowed(text),
        }
    }
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
