/// Column carrying the unique Business Partner identifier. Every input
/// dataset must have it.
pub const BP_ID_COLUMN: &str = "bp_id";

// File names written into the run's output directory
pub const CLEANED_CSV: &str = "business_partners_cleaned.csv";
pub const ISSUES_CSV: &str = "issues.csv";
pub const REPORT_HTML: &str = "report.html";
pub const SUMMARY_JSON: &str = "run_summary.json";
pub const RUN_LOG: &str = "run.log";
