use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DemoError, DemoResult};
use crate::style::Style;

// =============================================================================
// Settings shared by the demo binaries
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Colored headings and highlights.
    pub color: bool,
    /// Wait for ENTER after each menu demo.
    pub pause: bool,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            color: true,
            pause: true,
            log_level: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str, origin: &Path) -> DemoResult<Self> {
        let config: DemoConfig =
            toml::from_str(content).map_err(|err| DemoError::config(origin, err.message()))?;
        config.validate(origin)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> DemoResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| DemoError::config(path, format!("cannot read file: {err}")))?;
        Self::from_toml(&content, path)
    }

    /// Reads `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> DemoResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self, origin: &Path) -> DemoResult<()> {
        const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(DemoError::config(
                origin,
                format!(
                    "log_level '{}' is not one of {}",
                    self.log_level,
                    LEVELS.join(", ")
                ),
            ));
        }
        Ok(())
    }

    pub fn style(&self) -> Style {
        Style {
            color: self.color && Style::should_use_colors(),
        }
    }

    /// Starts `env_logger`, letting `RUST_LOG` override [`Self::log_level`].
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // A second init (e.g. from tests) is harmless.
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }
}
