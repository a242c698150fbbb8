//! Console styling for the human-readable report.

use std::io::IsTerminal;

use clap::ValueEnum;
use nu_ansi_term::Color;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Applies (or skips) the status colors used in console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        Self::new(enabled)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(Color::LightGreen, text)
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(Color::LightRed, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(Color::LightYellow, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}
