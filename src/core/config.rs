//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mastery/config.toml` and is read-only: a missing file
//! simply means "use defaults". Example:
//!
//! ```toml
//! [general]
//! default_model = "gemini-2.5-flash"
//! temperature = 0.7
//! start_lesson = "intro"
//!
//! [gemini]
//! api_key = "AIza..."     # Or set GEMINI_API_KEY / API_KEY
//! base_url = "https://generativelanguage.googleapis.com/v1beta"
//! ```

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::inference::providers::gemini::DEFAULT_GEMINI_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MasteryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub default_model: Option<String>,
    pub temperature: Option<f32>,
    pub start_lesson: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub model_name: String,
    pub temperature: f32,
    /// `None` when no non-empty key was found anywhere.
    pub api_key: Option<String>,
    pub base_url: String,
    pub start_lesson: Option<String>,
}

/// Values that arrive from the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub lesson: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mastery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mastery").join("config.toml"))
}

/// Load config from `~/.mastery/config.toml`, or defaults if there is none.
pub fn load_config() -> Result<MasteryConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(MasteryConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file yields the defaults;
/// a malformed one is an error.
pub fn load_config_from(path: &Path) -> Result<MasteryConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(MasteryConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MasteryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: model={:?}, temperature={:?}, start_lesson={:?}, api_key_set={}",
        config.general.default_model,
        config.general.temperature,
        config.general.start_lesson,
        config.gemini.api_key.is_some()
    );
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &MasteryConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `env` is injected so resolution can be tested without touching the
/// process environment.
pub fn resolve_with_env(
    config: &MasteryConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Model: CLI → env → config → default
    let model_name = cli
        .model
        .clone()
        .or_else(|| env("MASTERY_MODEL"))
        .or_else(|| config.general.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Temperature: env → config → default (unparseable env values are ignored)
    let temperature = env("MASTERY_TEMPERATURE")
        .and_then(|raw| match raw.trim().parse::<f32>() {
            Ok(t) => Some(t),
            Err(_) => {
                warn!("Ignoring invalid MASTERY_TEMPERATURE: {}", raw);
                None
            }
        })
        .or(config.general.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);

    // API key: GEMINI_API_KEY → API_KEY → config. Empty strings count as unset.
    let api_key = env("GEMINI_API_KEY")
        .filter(|k| !k.trim().is_empty())
        .or_else(|| env("API_KEY").filter(|k| !k.trim().is_empty()))
        .or_else(|| {
            config
                .gemini
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
        });

    // Base URL: env → config → default
    let base_url = env("GEMINI_BASE_URL")
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    // Start lesson: CLI → config
    let start_lesson = cli
        .lesson
        .clone()
        .or_else(|| config.general.start_lesson.clone());

    ResolvedConfig {
        model_name,
        temperature,
        api_key,
        base_url,
        start_lesson,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&MasteryConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.model_name, DEFAULT_MODEL);
        assert_eq!(resolved.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(resolved.api_key, None);
        assert_eq!(resolved.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(resolved.start_lesson, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MasteryConfig {
            general: GeneralConfig {
                default_model: Some("gemini-pro".to_string()),
                temperature: Some(0.2),
                start_lesson: Some("state".to_string()),
            },
            gemini: GeminiConfig {
                api_key: Some("from-file".to_string()),
                base_url: Some("http://localhost:8080".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.model_name, "gemini-pro");
        assert_eq!(resolved.temperature, 0.2);
        assert_eq!(resolved.api_key.as_deref(), Some("from-file"));
        assert_eq!(resolved.base_url, "http://localhost:8080");
        assert_eq!(resolved.start_lesson.as_deref(), Some("state"));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = MasteryConfig {
            general: GeneralConfig {
                default_model: Some("from-file".to_string()),
                ..Default::default()
            },
            gemini: GeminiConfig {
                api_key: Some("file-key".to_string()),
                ..Default::default()
            },
        };
        let env = env_map(&[
            ("MASTERY_MODEL", "env-model"),
            ("GEMINI_API_KEY", "env-key"),
            ("MASTERY_TEMPERATURE", "1.0"),
        ]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| env.get(key).cloned());
        assert_eq!(resolved.model_name, "env-model");
        assert_eq!(resolved.api_key.as_deref(), Some("env-key"));
        assert_eq!(resolved.temperature, 1.0);
    }

    #[test]
    fn test_cli_wins_over_env() {
        let cli = CliOverrides {
            model: Some("cli-model".to_string()),
            lesson: Some("async".to_string()),
        };
        let env = env_map(&[("MASTERY_MODEL", "env-model")]);
        let resolved = resolve_with_env(&MasteryConfig::default(), &cli, |key| env.get(key).cloned());
        assert_eq!(resolved.model_name, "cli-model");
        assert_eq!(resolved.start_lesson.as_deref(), Some("async"));
    }

    #[test]
    fn test_empty_api_key_counts_as_missing() {
        let config = MasteryConfig {
            gemini: GeminiConfig {
                api_key: Some("   ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_map(&[("GEMINI_API_KEY", "")]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| env.get(key).cloned());
        assert_eq!(resolved.api_key, None);
    }

    #[test]
    fn test_legacy_api_key_variable() {
        let env = env_map(&[("API_KEY", "legacy")]);
        let resolved = resolve_with_env(&MasteryConfig::default(), &CliOverrides::default(), |key| env.get(key).cloned());
        assert_eq!(resolved.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_invalid_env_temperature_falls_through() {
        let config = MasteryConfig {
            general: GeneralConfig {
                temperature: Some(0.3),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_map(&[("MASTERY_TEMPERATURE", "warm")]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| env.get(key).cloned());
        assert_eq!(resolved.temperature, 0.3);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
default_model = "my-model"
"#;
        let config: MasteryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_model.as_deref(), Some("my-model"));
        assert!(config.general.temperature.is_none());
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
default_model = "gemini-2.5-flash"
temperature = 0.5
start_lesson = "crud-model"

[gemini]
api_key = "AIza-test"
base_url = "http://127.0.0.1:9999/v1beta"
"#;
        let config: MasteryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.temperature, Some(0.5));
        assert_eq!(config.general.start_lesson.as_deref(), Some("crud-model"));
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("mastery-config-does-not-exist.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_model.is_none());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "mastery-config-malformed-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[general\ndefault_model = ").unwrap();
        let result = load_config_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
