//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggest: SuggestSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    /// Cap on the number of suggested endings.
    pub max_results: usize,
    /// Same-length endings within this numeric distance are admitted.
    pub numeric_window: u64,
    pub length_weight: u64,
    pub containment_penalty: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// First component of the generated whole-account export file name.
    pub file_prefix: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.suggest.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggest.max_results".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if s.export.file_prefix.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "export.file_prefix".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_match_contract() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suggest.max_results, 5);
        assert_eq!(s.suggest.numeric_window, 2);
        assert_eq!(s.suggest.length_weight, 2);
        assert_eq!(s.suggest.containment_penalty, 5);
        assert_eq!(s.export.file_prefix, "todas_las_listas");
    }

    #[test]
    fn zero_result_cap_rejected() {
        let toml = r#"
            [suggest]
            max_results = 0
            numeric_window = 2
            length_weight = 2
            containment_penalty = 5

            [export]
            file_prefix = "todas_las_listas"
        "#;
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_prefix_rejected() {
        let toml = r#"
            [suggest]
            max_results = 5
            numeric_window = 2
            length_weight = 2
            containment_penalty = 5

            [export]
            file_prefix = ""
        "#;
        assert!(parse_settings_toml(toml).is_err());
    }
}
