use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{DqError, Result};

/// Data quality rule configuration, loaded from a TOML file.
///
/// Every section is optional; an empty config file yields a configuration
/// with all rules at their defaults and deduplication disabled (empty key
/// lists).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fields that must be present and non-blank on every record
    pub required_fields: Vec<String>,
    /// Allowed values for the `bp_type` column; empty list disables the check
    pub allowed_bp_types: Vec<String>,
    pub email_rules: EmailRules,
    pub phone_rules: PhoneRules,
    pub country_rules: CountryRules,
    pub dedup_rules: DedupRules,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailRules {
    pub enabled: bool,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhoneRules {
    pub enabled: bool,
    /// Minimum number of digits a phone value must contain
    pub min_digits: usize,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            enabled: true,
            min_digits: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountryRules {
    /// Uppercase the `country` column during cleaning
    pub uppercase: bool,
}

impl Default for CountryRules {
    fn default() -> Self {
        Self { uppercase: true }
    }
}

/// Settings for the deduplication stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DedupRules {
    /// Fields whose normalized values form the exact-duplicate key tuple.
    /// Empty list disables exact-duplicate grouping.
    pub exact_keys: Vec<String>,
    /// Fields joined into the comparison text for fuzzy matching.
    /// Empty list disables fuzzy matching.
    pub fuzzy_keys: Vec<String>,
    pub fuzzy_enabled: bool,
    /// Minimum similarity score (0-100) for a fuzzy pair to be reported
    pub fuzzy_threshold: u8,
}

impl Default for DedupRules {
    fn default() -> Self {
        Self {
            exact_keys: Vec::new(),
            fuzzy_keys: Vec::new(),
            fuzzy_enabled: true,
            fuzzy_threshold: 90,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DqError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Every field the rules reference must exist in the input schema.
    /// Runs before validation and dedup so a misconfigured field name
    /// aborts the run instead of silently matching nothing.
    pub fn check_columns(&self, dataset: &Dataset) -> Result<()> {
        let mut referenced: Vec<&String> = Vec::new();
        referenced.extend(&self.required_fields);
        referenced.extend(&self.dedup_rules.exact_keys);
        if self.dedup_rules.fuzzy_enabled {
            referenced.extend(&self.dedup_rules.fuzzy_keys);
        }
        for field in referenced {
            if !dataset.has_column(field) {
                return Err(DqError::MissingColumn(field.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.required_fields.is_empty());
        assert!(config.email_rules.enabled);
        assert_eq!(config.phone_rules.min_digits, 7);
        assert!(config.country_rules.uppercase);
        assert!(config.dedup_rules.fuzzy_enabled);
        assert_eq!(config.dedup_rules.fuzzy_threshold, 90);
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            required_fields = ["bp_id", "name"]
            allowed_bp_types = ["PERSON", "COMPANY"]

            [phone_rules]
            min_digits = 9

            [dedup_rules]
            exact_keys = ["name", "city"]
            fuzzy_keys = ["name"]
            fuzzy_threshold = 85
            "#,
        )
        .unwrap();
        assert_eq!(config.required_fields, vec!["bp_id", "name"]);
        assert_eq!(config.phone_rules.min_digits, 9);
        assert!(config.phone_rules.enabled);
        assert_eq!(config.dedup_rules.exact_keys, vec!["name", "city"]);
        assert_eq!(config.dedup_rules.fuzzy_threshold, 85);
    }

    #[test]
    fn check_columns_rejects_unknown_key_field() {
        let dataset = Dataset::new(vec!["bp_id".to_string(), "name".to_string()]);
        let mut config = Config::default();
        config.dedup_rules.exact_keys = vec!["segment".to_string()];
        let err = config.check_columns(&dataset).unwrap_err();
        assert!(matches!(err, DqError::MissingColumn(field) if field == "segment"));
    }

    #[test]
    fn check_columns_ignores_fuzzy_keys_when_disabled() {
        let dataset = Dataset::new(vec!["bp_id".to_string(), "name".to_string()]);
        let mut config = Config::default();
        config.dedup_rules.fuzzy_keys = vec!["segment".to_string()];
        config.dedup_rules.fuzzy_enabled = false;
        assert!(config.check_columns(&dataset).is_ok());
    }
}
