//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.fileman/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The working directory itself is fixed and has no setting.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::messages::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilemanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
    pub clear_screen: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "fileman.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub color: bool,
    pub clear_screen: bool,
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

/// Returns the path to `~/.fileman/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fileman").join("config.toml"))
}

/// Load config from `~/.fileman/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FilemanConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FilemanConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(FilemanConfig::default())
        }
    }
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<FilemanConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FilemanConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FilemanConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# fileman configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# language = "es"             # "es" or "en" (or set FILEMAN_LANG)
# log_level = "info"          # off, error, warn, info, debug, trace (or FILEMAN_LOG)
# log_file = "fileman.log"    # Relative to the current directory (or FILEMAN_LOG_FILE)

# [display]
# color = true                # Set NO_COLOR to disable regardless of this value
# clear_screen = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &FilemanConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// Resolution with the environment supplied as a lookup function.
pub fn resolve_with_env(
    config: &FilemanConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Language: env → config → default
    let language = env("FILEMAN_LANG")
        .and_then(|s| match s.parse::<Language>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!("Ignoring FILEMAN_LANG: {}", e);
                None
            }
        })
        .or(config.general.language)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env("FILEMAN_LOG")
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| match s.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level {:?}, using {}", s, DEFAULT_LOG_LEVEL);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("FILEMAN_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // NO_COLOR wins over everything, whatever its value
    let color = env("NO_COLOR").is_none() && config.display.color.unwrap_or(true);

    ResolvedConfig {
        language,
        log_level,
        log_file: PathBuf::from(log_file),
        color,
        clear_screen: config.display.clear_screen.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&FilemanConfig::default(), no_env);
        assert_eq!(resolved.language, Language::Es);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.color);
        assert!(resolved.clear_screen);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FilemanConfig {
            general: GeneralConfig {
                language: Some(Language::En),
                log_level: Some("debug".to_string()),
                log_file: Some("custom.log".to_string()),
            },
            display: DisplayConfig {
                color: Some(false),
                clear_screen: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("custom.log"));
        assert!(!resolved.color);
        assert!(!resolved.clear_screen);
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = FilemanConfig {
            general: GeneralConfig {
                language: Some(Language::Es),
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_from(&[("FILEMAN_LANG", "en"), ("FILEMAN_LOG", "trace")]);
        let resolved = resolve_with_env(&config, env);
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_no_color_disables_styling() {
        let config = FilemanConfig {
            display: DisplayConfig {
                color: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, env_from(&[("NO_COLOR", "")]));
        assert!(!resolved.color);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = FilemanConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, env_from(&[("FILEMAN_LANG", "klingon")]));
        assert_eq!(resolved.language, Language::Es);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
language = "en"
log_level = "debug"
log_file = "/tmp/fileman.log"

[display]
color = false
clear_screen = true
"#;
        let config: FilemanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language, Some(Language::En));
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.display.color, Some(false));
        assert_eq!(config.display.clear_screen, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
color = false
"#;
        let config: FilemanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.color, Some(false));
        assert!(config.general.language.is_none());
        assert!(config.display.clear_screen.is_none());
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let result = toml::from_str::<FilemanConfig>("[general]\nlanguage = \"fr\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".fileman").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.language.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# language = \"es\""));
        // The generated file is all comments, so it loads as defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.display.color.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nlanguage = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
