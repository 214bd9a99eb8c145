//! Configuration loading and typed config structures for the overlay.
//!
//! Configuration is YAML with a default for every field, so an empty
//! mapping (`{}`) is a valid config. The trigger key can additionally be
//! overridden through the `FIELDGLASS_TRIGGER_KEY` environment variable.

use std::path::Path;

use serde::Deserialize;

use fieldglass_types::KeyCode;

/// Environment variable that overrides the configured trigger key.
pub const TRIGGER_KEY_ENV: &str = "FIELDGLASS_TRIGGER_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// How loudly an observed defect is treated.
///
/// Defects are always logged; the mode only decides whether the
/// best-effort message still reaches the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectMode {
    /// Log the defect and let the best-effort message through.
    #[default]
    Tolerate,
    /// Log the defect and suppress the message for that invocation.
    Strict,
}

/// Overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    /// Key whose release triggers a status query.
    #[serde(default = "default_trigger_key")]
    pub trigger_key: KeyCode,

    /// Defect severity; see [`DefectMode`].
    #[serde(default)]
    pub defect_mode: DefectMode,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            trigger_key: default_trigger_key(),
            defect_mode: DefectMode::default(),
        }
    }
}

fn default_trigger_key() -> KeyCode {
    KeyCode::new("Z")
}

impl OverlayConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment overrides: [`TRIGGER_KEY_ENV`] replaces the
    /// configured trigger key when set and non-empty.
    fn apply_env_overrides(&mut self) {
        self.override_trigger_key(std::env::var(TRIGGER_KEY_ENV).ok());
    }

    fn override_trigger_key(&mut self, key: Option<String>) {
        if let Some(key) = key
            && !key.is_empty()
        {
            self.trigger_key = KeyCode::new(key);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_yields_defaults() {
        let config = OverlayConfig::parse("{}").unwrap();
        assert_eq!(config.trigger_key, KeyCode::new("Z"));
        assert_eq!(config.defect_mode, DefectMode::Tolerate);
    }

    #[test]
    fn fields_parse_from_yaml() {
        let config = OverlayConfig::parse("trigger_key: F5\ndefect_mode: strict\n").unwrap();
        assert_eq!(config.trigger_key, KeyCode::new("F5"));
        assert_eq!(config.defect_mode, DefectMode::Strict);
    }

    #[test]
    fn unknown_defect_mode_is_a_yaml_error() {
        let result = OverlayConfig::parse("defect_mode: shouty\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn trigger_key_override_replaces_the_configured_key() {
        let mut config = OverlayConfig::default();
        config.override_trigger_key(Some(String::from("Q")));
        assert_eq!(config.trigger_key, KeyCode::new("Q"));
    }

    #[test]
    fn empty_or_absent_override_keeps_the_configured_key() {
        let mut config = OverlayConfig::default();
        config.override_trigger_key(Some(String::new()));
        assert_eq!(config.trigger_key, KeyCode::new("Z"));
        config.override_trigger_key(None);
        assert_eq!(config.trigger_key, KeyCode::new("Z"));
    }
}
