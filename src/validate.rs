//! Rule-based validation producing a per-record issues table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{DqError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingRequired,
    InvalidBpType,
    InvalidEmailFormat,
    PhoneTooShort,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingRequired => "missing_required",
            IssueKind::InvalidBpType => "invalid_bp_type",
            IssueKind::InvalidEmailFormat => "invalid_email_format",
            IssueKind::PhoneTooShort => "phone_too_short",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding against one record's field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub row_index: usize,
    pub bp_id: String,
    pub field: String,
    pub kind: IssueKind,
    pub severity: Severity,
}

impl Issue {
    fn new(dataset: &Dataset, row: usize, field: &str, kind: IssueKind, severity: Severity) -> Self {
        Self {
            row_index: row,
            bp_id: dataset.bp_id(row).to_string(),
            field: field.to_string(),
            kind,
            severity,
        }
    }
}

/// Run all configured validation rules over the dataset.
///
/// A required field that is absent from the schema is a configuration
/// error; a blank value in a present field is an issue. The bp_type,
/// email and phone rules only apply when their column exists.
pub fn validate(dataset: &Dataset, config: &Config) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for field in &config.required_fields {
        if !dataset.has_column(field) {
            return Err(DqError::MissingColumn(field.clone()));
        }
        for row in 0..dataset.len() {
            let blank = dataset
                .value(row, field)
                .map_or(true, |value| value.trim().is_empty());
            if blank {
                issues.push(Issue::new(
                    dataset,
                    row,
                    field,
                    IssueKind::MissingRequired,
                    Severity::High,
                ));
            }
        }
    }

    if dataset.has_column("bp_type") && !config.allowed_bp_types.is_empty() {
        for row in 0..dataset.len() {
            let allowed = dataset
                .value(row, "bp_type")
                .map_or(false, |value| config.allowed_bp_types.iter().any(|t| t == value));
            if !allowed {
                issues.push(Issue::new(
                    dataset,
                    row,
                    "bp_type",
                    IssueKind::InvalidBpType,
                    Severity::Medium,
                ));
            }
        }
    }

    if config.email_rules.enabled && dataset.has_column("email") {
        for row in 0..dataset.len() {
            if let Some(value) = dataset.value(row, "email") {
                if !value.trim().is_empty() && !EMAIL_RE.is_match(value) {
                    issues.push(Issue::new(
                        dataset,
                        row,
                        "email",
                        IssueKind::InvalidEmailFormat,
                        Severity::Medium,
                    ));
                }
            }
        }
    }

    if config.phone_rules.enabled && dataset.has_column("phone") {
        for row in 0..dataset.len() {
            if let Some(value) = dataset.value(row, "phone") {
                let digits = value.chars().filter(char::is_ascii_digit).count();
                if digits < config.phone_rules.min_digits {
                    issues.push(Issue::new(
                        dataset,
                        row,
                        "phone",
                        IssueKind::PhoneTooShort,
                        Severity::Low,
                    ));
                }
            }
        }
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, Option<&str>, Option<&str>, Option<&str>, Option<&str>)]) -> Dataset {
        let mut dataset = Dataset::new(vec![
            "bp_id".to_string(),
            "bp_type".to_string(),
            "name".to_string(),
            "email".to_string(),
            "phone".to_string(),
        ]);
        for (bp_id, bp_type, name, email, phone) in rows {
            dataset.push_row(vec![
                Some(bp_id.to_string()),
                bp_type.map(str::to_string),
                name.map(str::to_string),
                email.map(str::to_string),
                phone.map(str::to_string),
            ]);
        }
        dataset
    }

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn flags_missing_required_fields() {
        let dataset = dataset(&[("BP1", Some("PERSON"), Some("  "), None, Some("0301234567"))]);
        let mut config = Config::default();
        config.required_fields = vec!["bp_id".to_string(), "name".to_string()];

        let issues = validate(&dataset, &config).unwrap();
        assert!(kinds(&issues).contains(&IssueKind::MissingRequired));
        let issue = issues.iter().find(|i| i.kind == IssueKind::MissingRequired).unwrap();
        assert_eq!(issue.field, "name");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.bp_id, "BP1");
    }

    #[test]
    fn required_field_absent_from_schema_is_config_error() {
        let dataset = dataset(&[("BP1", Some("PERSON"), Some("Anna"), None, None)]);
        let mut config = Config::default();
        config.required_fields = vec!["segment".to_string()];

        let err = validate(&dataset, &config).unwrap_err();
        assert!(matches!(err, DqError::MissingColumn(field) if field == "segment"));
    }

    #[test]
    fn flags_unknown_bp_type() {
        let dataset = dataset(&[
            ("BP1", Some("ROBOT"), Some("Anna"), None, None),
            ("BP2", Some("PERSON"), Some("John"), None, None),
        ]);
        let mut config = Config::default();
        config.allowed_bp_types = vec!["PERSON".to_string(), "COMPANY".to_string()];

        let issues = validate(&dataset, &config).unwrap();
        assert_eq!(kinds(&issues), vec![IssueKind::InvalidBpType]);
        assert_eq!(issues[0].row_index, 0);
    }

    #[test]
    fn flags_malformed_email_but_not_blank_one() {
        let dataset = dataset(&[
            ("BP1", None, Some("Anna"), Some("bad-email"), None),
            ("BP2", None, Some("John"), None, None),
            ("BP3", None, Some("Mia"), Some("mia@example.com"), None),
        ]);
        let issues = validate(&dataset, &Config::default()).unwrap();
        assert_eq!(kinds(&issues), vec![IssueKind::InvalidEmailFormat]);
        assert_eq!(issues[0].bp_id, "BP1");
    }

    #[test]
    fn email_rule_can_be_disabled() {
        let dataset = dataset(&[("BP1", None, Some("Anna"), Some("bad-email"), None)]);
        let mut config = Config::default();
        config.email_rules.enabled = false;
        assert!(validate(&dataset, &config).unwrap().is_empty());
    }

    #[test]
    fn flags_short_phone_numbers() {
        let dataset = dataset(&[
            ("BP1", None, Some("Anna"), None, Some("12")),
            ("BP2", None, Some("John"), None, Some("0301234567")),
            ("BP3", None, Some("Mia"), None, None),
        ]);
        let issues = validate(&dataset, &Config::default()).unwrap();
        assert_eq!(kinds(&issues), vec![IssueKind::PhoneTooShort]);
        assert_eq!(issues[0].severity, Severity::Low);
    }
}
