use std::path::Path;

use log::warn;

use crate::error::ConfigError;

/// Default file name the GUI looks for in the working directory
pub const CONFIG_FILE: &str = "tictactoe.toml";

/// Upper bound on the artificial AI delay
pub const MAX_THINK_DELAY_MS: u64 = 5_000;

/// Smallest window edge the board still fits in
pub const MIN_WINDOW_EDGE: f32 = 320.0;

/// AI presentation settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Pause before the computer answers, purely cosmetic
    pub think_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig { think_delay_ms: 100 }
    }
}

/// Window and panel settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub show_debug: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_debug: true,
            window_width: 720.0,
            window_height: 560.0,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai.think_delay_ms must be <= {}",
                MAX_THINK_DELAY_MS
            )));
        }
        if self.ui.window_width < MIN_WINDOW_EDGE || self.ui.window_height < MIN_WINDOW_EDGE {
            return Err(ConfigError::Validation(format!(
                "ui.window_width and ui.window_height must be >= {}",
                MIN_WINDOW_EDGE
            )));
        }
        Ok(())
    }
}
