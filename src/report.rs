//! HTML run report for human review.

use chrono::Utc;
use std::fs;
use std::path::Path;

use crate::dataset::Dataset;
use crate::dedup::{ExactDuplicate, FuzzyPair};
use crate::error::Result;
use crate::validate::{Issue, IssueKind, Severity};

const SAMPLE_ROWS: usize = 25;
const TOP_ISSUE_KINDS: usize = 10;

const STYLE: &str = "\
    body { font-family: Arial, sans-serif; margin: 24px; }\n\
    h1,h2 { margin-bottom: 8px; }\n\
    table { border-collapse: collapse; width: 100%; margin: 12px 0; }\n\
    th, td { border: 1px solid #ddd; padding: 8px; }\n\
    th { background: #f5f5f5; text-align: left; }\n\
    .kpi { display: inline-block; padding: 10px 14px; border: 1px solid #ddd; margin-right: 10px; }";

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn html_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "<p>None found.</p>\n".to_string();
    }
    let mut html = String::from("<table>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

fn kpi(label: &str, value: usize) -> String {
    format!("<div class=\"kpi\"><b>{label}:</b> {value}</div>\n")
}

/// Readable context for a duplicate row: name, city and country of the
/// record at `row`, blank when the column is absent.
fn record_preview(dataset: &Dataset, row: usize) -> [String; 3] {
    ["name", "city", "country"]
        .map(|column| dataset.value(row, column).unwrap_or("").to_string())
}

fn severity_summary(issues: &[Issue]) -> Vec<Vec<String>> {
    let mut rows: Vec<(Severity, usize)> = [Severity::High, Severity::Medium, Severity::Low]
        .into_iter()
        .map(|severity| (severity, issues.iter().filter(|i| i.severity == severity).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .map(|(severity, count)| vec![severity.to_string(), count.to_string()])
        .collect()
}

fn top_issue_kinds(issues: &[Issue]) -> Vec<Vec<String>> {
    let kinds = [
        IssueKind::MissingRequired,
        IssueKind::InvalidBpType,
        IssueKind::InvalidEmailFormat,
        IssueKind::PhoneTooShort,
    ];
    let mut rows: Vec<(IssueKind, Severity, usize)> = Vec::new();
    for kind in kinds {
        let matching: Vec<&Issue> = issues.iter().filter(|i| i.kind == kind).collect();
        if let Some(first) = matching.first() {
            rows.push((kind, first.severity, matching.len()));
        }
    }
    rows.sort_by(|a, b| b.2.cmp(&a.2));
    rows.truncate(TOP_ISSUE_KINDS);
    rows.into_iter()
        .map(|(kind, severity, count)| {
            vec![kind.to_string(), severity.to_string(), count.to_string()]
        })
        .collect()
}

/// Render the full data quality report to `out_path`.
pub fn render_report(
    out_path: &Path,
    dataset: &Dataset,
    issues: &[Issue],
    exact_duplicates: &[ExactDuplicate],
    fuzzy_pairs: &[FuzzyPair],
) -> Result<()> {
    let issue_sample: Vec<Vec<String>> = issues
        .iter()
        .take(SAMPLE_ROWS)
        .map(|issue| {
            vec![
                issue.row_index.to_string(),
                issue.bp_id.clone(),
                issue.field.clone(),
                issue.kind.to_string(),
                issue.severity.to_string(),
            ]
        })
        .collect();

    let exact_rows: Vec<Vec<String>> = exact_duplicates
        .iter()
        .take(SAMPLE_ROWS)
        .map(|dup| {
            let [name, city, country] = record_preview(dataset, dup.row_index);
            vec![
                dup.group_id.to_string(),
                dup.row_index.to_string(),
                dup.bp_id.clone(),
                name,
                city,
                country,
                "merge_candidate".to_string(),
            ]
        })
        .collect();

    // Presentation order only; the matcher itself reports traversal order.
    let mut by_score: Vec<&FuzzyPair> = fuzzy_pairs.iter().collect();
    by_score.sort_by(|a, b| b.score.cmp(&a.score));
    let fuzzy_rows: Vec<Vec<String>> = by_score
        .iter()
        .take(SAMPLE_ROWS)
        .map(|pair| {
            let [name_i, city_i, country_i] = record_preview(dataset, pair.row_i);
            let [name_j, city_j, country_j] = record_preview(dataset, pair.row_j);
            vec![
                pair.row_i.to_string(),
                pair.bp_id_i.clone(),
                name_i,
                city_i,
                country_i,
                pair.row_j.to_string(),
                pair.bp_id_j.clone(),
                name_j,
                city_j,
                country_j,
                pair.score.to_string(),
                pair.recommended_action.to_string(),
            ]
        })
        .collect();

    let mut html = String::new();
    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str("<title>Business Partner Data Quality Report</title>\n");
    html.push_str(&format!("<style>\n{STYLE}\n</style>\n</head>\n<body>\n"));
    html.push_str("<h1>Business Partner – Data Quality Report</h1>\n");

    html.push_str(&kpi("Total rows", dataset.len()));
    html.push_str(&kpi("Total issues", issues.len()));
    html.push_str(&kpi("Exact-dup rows", exact_duplicates.len()));
    html.push_str(&kpi("Fuzzy pairs", fuzzy_pairs.len()));

    html.push_str("<h2>Issues by severity</h2>\n");
    html.push_str(&html_table(&["severity", "count"], &severity_summary(issues)));

    html.push_str("<h2>Top issue types</h2>\n");
    html.push_str(&html_table(
        &["issue", "severity", "count"],
        &top_issue_kinds(issues),
    ));

    html.push_str("<h2>Sample issues</h2>\n");
    html.push_str(&html_table(
        &["row_index", "bp_id", "field", "issue", "severity"],
        &issue_sample,
    ));

    html.push_str("<h2>Exact duplicates</h2>\n");
    html.push_str(&html_table(
        &[
            "group_id",
            "row_index",
            "bp_id",
            "name",
            "city",
            "country",
            "recommended_action",
        ],
        &exact_rows,
    ));

    html.push_str("<h2>Fuzzy duplicate pairs (sample)</h2>\n");
    html.push_str(&html_table(
        &[
            "row_i", "bp_id_i", "name_i", "city_i", "country_i", "row_j", "bp_id_j", "name_j",
            "city_j", "country_j", "score", "recommended_action",
        ],
        &fuzzy_rows,
    ));

    html.push_str(&format!(
        "<p><small>Generated {}</small></p>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>\n");

    fs::write(out_path, html)?;
    Ok(())
}
