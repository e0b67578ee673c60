//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings and
//! salary rule tables from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{SalaryRules, Settings};

/// Loads and provides access to the register configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── settings.yaml   # Database path, bind address, page size
/// └── rules.yaml      # Optional salary tables (see settings.rules_path)
/// ```
///
/// When `rules_path` is absent from the settings the built-in tables from
/// [`SalaryRules::default`] are used.
///
/// # Example
///
/// ```no_run
/// use payroll_register::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Database: {}", loader.settings().database_path.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: Settings,
    rules: SalaryRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `settings.yaml` is missing or invalid, or if the
    /// rules file it names cannot be loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;

        let rules = match &settings.rules_path {
            Some(rules_path) => Self::load_rules(path.join(rules_path))?,
            None => SalaryRules::default(),
        };

        Ok(Self { settings, rules })
    }

    /// Builds a loader from already-constructed parts, skipping the files.
    ///
    /// The rule tables are checked the same way as a loaded rules file.
    pub fn from_parts(settings: Settings, rules: SalaryRules) -> PayrollResult<Self> {
        Self::validate_rules(&rules).map_err(|message| PayrollError::ConfigParseError {
            path: "<in-memory>".to_string(),
            message,
        })?;
        Ok(Self { settings, rules })
    }

    /// Loads and validates a salary rules file.
    pub fn load_rules<P: AsRef<Path>>(path: P) -> PayrollResult<SalaryRules> {
        let path = path.as_ref();
        let rules = Self::load_yaml::<SalaryRules>(path)?;
        Self::validate_rules(&rules).map_err(|message| PayrollError::ConfigParseError {
            path: path.display().to_string(),
            message,
        })?;
        Ok(rules)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rules(rules: &SalaryRules) -> Result<(), String> {
        if rules.top_position.multiplier < Decimal::ZERO {
            return Err("top_position.multiplier must not be negative".to_string());
        }
        if rules.family_allowance.rate < Decimal::ZERO {
            return Err("family_allowance.rate must not be negative".to_string());
        }
        if let Some((count, _)) = rules
            .child_allowance_rates
            .iter()
            .find(|(_, rate)| **rate < Decimal::ZERO)
        {
            return Err(format!("child_allowance_rates.{} must not be negative", count));
        }
        Ok(())
    }

    /// Returns the application settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the salary rule tables.
    pub fn rules(&self) -> &SalaryRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().page_size, 6);
        assert_eq!(loader.settings().database_path, PathBuf::from("payroll.db"));
    }

    #[test]
    fn test_rules_file_matches_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rules(), &SalaryRules::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rules_rejects_negative_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.yaml");
        fs::write(
            &path,
            r#"
base_pay: {}
position_allowance: {}
top_position: { name: Guru Besar, multiplier: "3" }
child_allowance_rates: { 1: "-0.05" }
family_allowance: { married_status: Nikah, rate: "0.10" }
"#,
        )
        .unwrap();

        match ConfigLoader::load_rules(&path) {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(message.contains("child_allowance_rates.1"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rules_reports_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.yaml");
        fs::write(&path, "base_pay: [unterminated").unwrap();

        assert!(matches!(
            ConfigLoader::load_rules(&path),
            Err(PayrollError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_from_parts_keeps_given_settings_and_rules() {
        let settings = Settings {
            page_size: 2,
            ..Settings::default()
        };
        let mut rules = SalaryRules::default();
        rules.base_pay.insert("IVA".to_string(), 5_000_000);

        let loader = ConfigLoader::from_parts(settings.clone(), rules.clone()).unwrap();
        assert_eq!(loader.settings().page_size, 2);
        assert_eq!(loader.rules(), &rules);
    }

    #[test]
    fn test_from_parts_rejects_negative_rate() {
        let mut rules = SalaryRules::default();
        rules.family_allowance.rate = Decimal::new(-10, 2);

        assert!(matches!(
            ConfigLoader::from_parts(Settings::default(), rules),
            Err(PayrollError::ConfigParseError { .. })
        ));
    }
}
