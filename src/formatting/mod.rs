use crate::core::StyleTag;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on top of `color`.
    pub fn from_env(color: ColorMode) -> Self {
        Self::from_env_vars(
            color,
            env::var("NO_COLOR").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    fn from_env_vars(
        color: ColorMode,
        no_color: Option<&str>,
        clicolor: Option<&str>,
        clicolor_force: Option<&str>,
    ) -> Self {
        let mut config = Self::new(color);

        // NO_COLOR per no-color.org: presence disables color
        if no_color.is_some() || clicolor == Some("0") {
            config.color = ColorMode::Never;
        }

        if clicolor_force == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new(*self))
        } else {
            Box::new(PlainFormatter)
        }
    }
}

pub trait OutputFormatter {
    /// Render text with a classification style tag.
    fn styled(&self, text: &str, style: StyleTag) -> String;
    fn alert(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn italic(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn enabled(&self) -> bool {
        self.config.color.should_use_color()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn styled(&self, text: &str, style: StyleTag) -> String {
        if !self.enabled() {
            return text.to_string();
        }
        match style {
            StyleTag::GreenBold => text.green().bold().to_string(),
            StyleTag::BlueBold => text.blue().bold().to_string(),
            StyleTag::Plain => text.to_string(),
        }
    }

    fn alert(&self, text: &str) -> String {
        if self.enabled() {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn italic(&self, text: &str) -> String {
        if self.enabled() {
            text.italic().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.enabled() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn styled(&self, text: &str, _style: StyleTag) -> String {
        text.to_string()
    }

    fn alert(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn italic(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
