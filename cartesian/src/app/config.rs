use std::path::{Path, PathBuf};

use app_core::json::load_json;
use serde::Deserialize;

use super::i18n::Language;

const CONFIG_FILE_NAME: &str = ".cartesian.json";

/// Startup settings, read from `~/.cartesian.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub window_width: f32,
    pub window_height: f32,
    pub marker_radius: f32,
    pub custom_marker_radius: f32,
    /// Directory the file dialog starts in.
    pub initial_dir: Option<PathBuf>,
    /// Font added as fallback for glyphs the built-in fonts lack (CJK).
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            window_width: 1200.0,
            window_height: 800.0,
            marker_radius: 4.0,
            custom_marker_radius: 6.0,
            initial_dir: None,
            font_path: None,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        Self::from_path(&home.join(CONFIG_FILE_NAME))
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let config: Self = load_json(path)?;
        log::debug!("using config {:?}", config);
        Ok(config)
    }
}
