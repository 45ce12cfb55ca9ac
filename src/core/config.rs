//! Layered settings: built-in defaults, then the JSON config file, then git config,
//! then command-line flags.
//!
//! The JSON file lives at `<config dir>/git-stager/config.json`:
//!
//! ```json
//! { "color": "auto", "colors": { "prompt": "bold green" }, "menu_columns": 4 }
//! ```
//!
//! From git config, `color.interactive` and `color.interactive.<slot>` are read with
//! the same meaning git gives them.

use crate::core::colors::{parse_color_spec, ColorRole, Palette};
use crate::core::dirs::get_config_file;
use crate::core::error::{GitStagerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MENU_COLUMNS: usize = 4;

const GIT_COLOR_KEY: &str = "color.interactive";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Interpret a git color boolean (`true`, `never`, `auto`, ...)
    pub fn from_git(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" | "false" | "no" | "off" | "0" => Some(Self::Never),
            "auto" | "true" | "yes" | "on" | "1" => Some(Self::Auto),
            _ => None,
        }
    }

    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSlots {
    pub prompt: Option<String>,
    pub header: Option<String>,
    pub help: Option<String>,
    pub error: Option<String>,
}

impl ColorSlots {
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        match role {
            ColorRole::Prompt => self.prompt.as_deref(),
            ColorRole::Header => self.header.as_deref(),
            ColorRole::Help => self.help.as_deref(),
            ColorRole::Error => self.error.as_deref(),
        }
    }
}

/// Contents of the JSON config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub color: ColorWhen,
    pub colors: ColorSlots,
    pub menu_columns: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            color: ColorWhen::Auto,
            colors: ColorSlots::default(),
            menu_columns: DEFAULT_MENU_COLUMNS,
        }
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file()?)
    }

    /// Read `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GitStagerError::config_read_failed(path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| GitStagerError::config_parse_failed(path, e))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Effective settings after every layer has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub color: ColorWhen,
    /// Role styles; whether they are used is decided by [`Settings::palette`]
    pub styles: Palette,
    pub menu_columns: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorWhen::Auto,
            styles: Palette::default(),
            menu_columns: DEFAULT_MENU_COLUMNS,
        }
    }
}

impl Settings {
    /// Apply every layer: file, then the repository's git config, then the flag
    pub fn resolve(
        cli_color: Option<ColorWhen>,
        git_config: Option<&git2::Config>,
    ) -> Result<Self> {
        let mut settings = Self::from_file(&FileConfig::load()?)?;
        if let Some(config) = git_config {
            settings.apply_git_config(config)?;
        }
        if let Some(color) = cli_color {
            settings.color = color;
        }
        log::debug!("effective settings: {settings:?}");
        Ok(settings)
    }

    pub fn from_file(file: &FileConfig) -> Result<Self> {
        let mut settings = Self {
            color: file.color,
            menu_columns: file.menu_columns,
            ..Default::default()
        };
        for role in ColorRole::ALL {
            if let Some(spec) = file.colors.get(role) {
                settings.styles.set_style(role, parse_color_spec(role.slot(), spec)?);
            }
        }
        Ok(settings)
    }

    pub fn apply_git_config(&mut self, config: &git2::Config) -> Result<()> {
        match config.get_string(GIT_COLOR_KEY) {
            Ok(value) => match ColorWhen::from_git(&value) {
                Some(color) => self.color = color,
                None => log::warn!("ignoring {GIT_COLOR_KEY}={value}"),
            },
            Err(e) if e.code() == git2::ErrorCode::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let mut entries = config.entries(Some(r"color\.interactive\..*"))?;
        while let Some(entry) = entries.next() {
            let entry = entry?;
            let (Some(name), Some(value)) = (entry.name(), entry.value()) else {
                continue;
            };
            let Some(slot) = name.strip_prefix("color.interactive.") else {
                continue;
            };
            match ColorRole::from_slot(slot) {
                Some(role) => self.styles.set_style(role, parse_color_spec(slot, value)?),
                None => log::warn!("ignoring unknown color slot '{slot}'"),
            }
        }
        Ok(())
    }

    /// Palette to render with, given whether stdout is a terminal
    pub fn palette(&self, is_terminal: bool) -> Palette {
        Palette {
            enabled: self.color.enabled(is_terminal),
            ..self.styles.clone()
        }
    }
}
