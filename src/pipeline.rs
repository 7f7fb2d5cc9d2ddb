//! End-to-end pipeline run: load, clean, validate, dedup, write outputs.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cleaning::basic_cleaning;
use crate::config::Config;
use crate::constants::{CLEANED_CSV, ISSUES_CSV, REPORT_HTML, SUMMARY_JSON};
use crate::dataset::Dataset;
use crate::dedup::{find_exact_duplicates, find_fuzzy_duplicates, FuzzyPair};
use crate::error::Result;
use crate::report::render_report;
use crate::validate::{validate, Issue};

/// Counts and output locations of one completed run, also written as
/// `run_summary.json` into the output directory.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub total_rows: usize,
    pub total_issues: usize,
    pub exact_duplicate_rows: usize,
    pub fuzzy_pairs: usize,
    pub cleaned_csv: PathBuf,
    pub issues_csv: PathBuf,
    pub report_html: PathBuf,
    pub summary_json: PathBuf,
}

fn write_issues_csv(issues: &[Issue], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["row_index", "bp_id", "field", "issue", "severity"])?;
    for issue in issues {
        writer.write_record([
            issue.row_index.to_string(),
            issue.bp_id.clone(),
            issue.field.clone(),
            issue.kind.to_string(),
            issue.severity.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the full data quality pipeline and write all outputs to `out_dir`
/// (which must exist).
pub fn run_pipeline(input: &Path, config_path: &Path, out_dir: &Path) -> Result<RunSummary> {
    let config = Config::load(config_path)?;

    info!("Loading input: {}", input.display());
    let raw = Dataset::from_csv(input)?;
    info!("Rows loaded: {}", raw.len());

    info!("Basic cleaning...");
    let cleaned = basic_cleaning(&raw, &config);

    // A rule or key field missing from the schema aborts here, before any
    // stage that would consume it.
    config.check_columns(&cleaned)?;

    info!("Running validation...");
    let issues = validate(&cleaned, &config)?;
    info!("Issues found: {}", issues.len());

    info!("Finding exact duplicates...");
    let exact_duplicates = find_exact_duplicates(&cleaned, &config.dedup_rules.exact_keys);
    info!("Exact-duplicate rows: {}", exact_duplicates.len());

    let fuzzy_pairs: Vec<FuzzyPair> = if config.dedup_rules.fuzzy_enabled {
        info!("Finding fuzzy duplicates...");
        let pairs = find_fuzzy_duplicates(
            &cleaned,
            &config.dedup_rules.fuzzy_keys,
            config.dedup_rules.fuzzy_threshold,
        );
        info!("Fuzzy duplicate pairs: {}", pairs.len());
        pairs
    } else {
        Vec::new()
    };

    let summary = RunSummary {
        total_rows: cleaned.len(),
        total_issues: issues.len(),
        exact_duplicate_rows: exact_duplicates.len(),
        fuzzy_pairs: fuzzy_pairs.len(),
        cleaned_csv: out_dir.join(CLEANED_CSV),
        issues_csv: out_dir.join(ISSUES_CSV),
        report_html: out_dir.join(REPORT_HTML),
        summary_json: out_dir.join(SUMMARY_JSON),
    };

    info!("Writing outputs -> {}", out_dir.display());
    cleaned.to_csv(&summary.cleaned_csv)?;
    write_issues_csv(&issues, &summary.issues_csv)?;
    render_report(
        &summary.report_html,
        &cleaned,
        &issues,
        &exact_duplicates,
        &fuzzy_pairs,
    )?;
    fs::write(&summary.summary_json, serde_json::to_string_pretty(&summary)?)?;

    info!("Pipeline complete.");
    Ok(summary)
}
