//! User preferences for taskdesk.
//!
//! The only persisted setting is the display theme. It lives in
//! `config.json` inside the application's data directory, outside the task
//! store, and is read with defaults when the file does not exist yet.
//!
//! ```rust,no_run
//! use taskdesk::libs::config::{Config, Theme};
//!
//! let mut config = Config::read()?;
//! config.theme = Theme::Plain;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Look of prompts and tables.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Coloured prompts, box-drawn tables and colour-coded statuses.
    #[default]
    Colorful,
    /// Uncoloured prompts and ASCII tables.
    Plain,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Colorful, Theme::Plain];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Colorful => "colorful",
            Theme::Plain => "plain",
        }
    }

    /// Prompt theme used by the terminal presentation.
    pub fn dialog_theme(&self) -> Box<dyn dialoguer::theme::Theme> {
        match self {
            Theme::Colorful => Box::new(ColorfulTheme::default()),
            Theme::Plain => Box::new(dialoguer::theme::SimpleTheme),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads `path`, falling back to defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleAppearance, true);
        let names: Vec<&str> = Theme::ALL.iter().map(Theme::name).collect();
        let current = Theme::ALL.iter().position(|theme| *theme == config.theme).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTheme.to_string())
            .items(&names)
            .default(current)
            .interact()?;
        config.theme = Theme::ALL[selection];

        Ok(config)
    }
}
