use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::quiz::Pacing;

pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "ja"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub start_time: ClockTime,
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    #[serde(default = "default_celebration_delay_ms")]
    pub celebration_delay_ms: u64,
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f64,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_advance_delay_ms() -> u64 {
    2000
}
fn default_celebration_delay_ms() -> u64 {
    1000
}
fn default_cell_aspect() -> f64 {
    2.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            start_time: ClockTime::default(),
            advance_delay_ms: default_advance_delay_ms(),
            celebration_delay_ms: default_celebration_delay_ms(),
            cell_aspect: default_cell_aspect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kidclock")
            .join("config.toml")
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            advance_delay: Duration::from_millis(self.advance_delay_ms),
            celebration_delay: Duration::from_millis(self.celebration_delay_ms),
        }
    }

    /// Reset values a hand-edited file can get wrong.
    pub fn normalize(&mut self) {
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }
        if !self.cell_aspect.is_finite() || self.cell_aspect <= 0.0 {
            self.cell_aspect = default_cell_aspect();
        }
    }
}
