use crate::error::{Result, ScmVersionError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name looked up in the repository and user config directories
pub const CONFIG_FILE_NAME: &str = "scm-version.toml";

/// Represents the settings file for scm-version.
///
/// Holds option keys to seed before command-line definitions, and logging options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Option keys; values may be any TOML scalar since only presence matters
    #[serde(default)]
    pub properties: BTreeMap<String, toml::Value>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Returns the default log level directive.
fn default_log_level() -> String {
    "warn".to_string()
}

/// Logging options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Properties from the file as plain strings
    pub fn property_map(&self) -> HashMap<String, String> {
        self.properties
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `scm-version.toml` in the repository directory
/// 3. `scm-version.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Arguments
/// * `config_path` - Optional path to a custom settings file
/// * `directory` - Repository directory searched for a project-local file
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, directory: &Path) -> Result<Settings> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(directory),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            parse_config(&content).map_err(|e| {
                ScmVersionError::config(format!("{}: {}", path.display(), e))
            })
        }
        None => Ok(Settings::default()),
    }
}

fn find_config_file(directory: &Path) -> Option<PathBuf> {
    let local = directory.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|config_dir| config_dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Parses settings from TOML text.
pub fn parse_config(content: &str) -> std::result::Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Splits a `KEY[=VALUE]` definition; a bare key gets an empty value.
pub fn parse_define(define: &str) -> (String, String) {
    match define.split_once('=') {
        Some((key, value)) => (key.trim().to_string(), value.to_string()),
        None => (define.trim().to_string(), String::new()),
    }
}

/// Settings file properties overlaid with command-line definitions.
///
/// Definitions win over file properties with the same key.
pub fn merge_properties(settings: &Settings, defines: &[String]) -> HashMap<String, String> {
    let mut properties = settings.property_map();
    properties.extend(defines.iter().map(|define| parse_define(define)));
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.properties.is_empty());
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_parse_config() {
        let settings = parse_config(
            r#"
[properties]
"scm.next.minor.release" = ""
"scm.snapshot" = true

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let properties = settings.property_map();
        assert_eq!(properties.get("scm.next.minor.release").map(String::as_str), Some(""));
        assert_eq!(properties.get("scm.snapshot").map(String::as_str), Some("true"));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_parse_config_empty() {
        assert_eq!(parse_config("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_config_invalid() {
        assert!(parse_config("[properties\n").is_err());
    }

    #[test]
    fn test_parse_define() {
        assert_eq!(
            parse_define("scm.release"),
            ("scm.release".to_string(), String::new())
        );
        assert_eq!(
            parse_define("scm.version=1.0.0"),
            ("scm.version".to_string(), "1.0.0".to_string())
        );
        assert_eq!(
            parse_define("custom=a=b"),
            ("custom".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn test_merge_properties_defines_win() {
        let settings = parse_config(
            r#"
[properties]
"scm.version" = "1.0.0"
"scm.release" = ""
"#,
        )
        .unwrap();

        let merged = merge_properties(&settings, &["scm.version=2.0.0".to_string()]);
        assert_eq!(merged.get("scm.version").map(String::as_str), Some("2.0.0"));
        assert!(merged.contains_key("scm.release"));
    }
}
