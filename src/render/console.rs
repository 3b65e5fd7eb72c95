//! Human-readable summaries printed by the CLI.

use crate::domain::{HeaderReport, MergeStats, VerifySummary};
use serde_json::Value;

const RULE_WIDTH: usize = 60;

/// Numbered header listing plus the column inventory.
pub fn render_header_report(report: &HeaderReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str("ALL CSV COLUMN HEADERS:\n");
    out.push_str(&format!("{rule}\n"));
    for (i, col) in report.columns.iter().enumerate() {
        out.push_str(&format!("  [{i:2}] {col:?}\n"));
    }
    out.push_str(&format!("{rule}\n"));

    if !report.duplicates.is_empty() {
        out.push_str("\nDuplicate column names:\n");
        for (col, count) in &report.duplicates {
            out.push_str(&format!("  {col:?} appears {count} times\n"));
        }
    }

    out.push_str(&format!("\nUsing {:?} column for matching\n", report.city_column));

    match report.foreign_index() {
        Some(idx) => {
            out.push_str(&format!(
                "Found 'Foreign' column at index {idx} - mapped to 'Foreign_Born' and 'Foreign Born - Total Pop'\n"
            ));
            if report.foreign_indices.len() > 1 {
                out.push_str(&format!(
                    "  {} columns named 'Foreign' at indices {:?}; using the first\n",
                    report.foreign_indices.len(),
                    report.foreign_indices
                ));
            }
        }
        None => {
            out.push_str("No 'Foreign' column; foreign-born fields are not derived\n");
            if !report.foreign_candidates.is_empty() {
                out.push_str("  Columns that might contain foreign born data:\n");
                write_indexed(&mut out, report, &report.foreign_candidates);
            }
        }
    }

    if !report.total_columns.is_empty() {
        out.push_str(&format!(
            "\nFound {} column(s) containing 'Total':\n",
            report.total_columns.len()
        ));
        write_indexed(&mut out, report, &report.total_columns);
    }
    if !report.estimate_columns.is_empty() {
        out.push_str(&format!(
            "\nFound {} column(s) containing 'Estimate':\n",
            report.estimate_columns.len()
        ));
        write_indexed(&mut out, report, &report.estimate_columns);
    }

    out
}

fn write_indexed(out: &mut String, report: &HeaderReport, indices: &[usize]) {
    for &idx in indices {
        if let Some(col) = report.columns.get(idx) {
            out.push_str(&format!("  [{idx}] {col:?}\n"));
        }
    }
}

pub fn render_merge_stats(stats: &MergeStats) -> String {
    let mut out = String::new();
    out.push_str("Matching results:\n");
    out.push_str(&format!("  Matched: {}\n", stats.matched));
    out.push_str(&format!("  Unmatched: {}\n", stats.unmatched));

    if stats.unmatched > 0 {
        if stats.unmatched <= stats.unmatched_names.len() {
            out.push_str(&format!(
                "\nUnmatched city names (first {}):\n",
                stats.unmatched_names.len()
            ));
        } else {
            out.push_str(&format!(
                "\nUnmatched city names (showing first {} of {}):\n",
                stats.unmatched_names.len(),
                stats.unmatched
            ));
        }
        for name in &stats.unmatched_names {
            out.push_str(&format!("    - {name}\n"));
        }
    }
    out
}

pub fn render_verify_summary(summary: &VerifySummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Features with demographic data: {}\n", summary.with_demographics));
    if let Some(sample) = &summary.sample {
        out.push_str(&format!("\nSample matched feature: {}\n", display(&sample.name)));
        out.push_str(&format!("  Population: {}\n", display(&sample.population)));
        out.push_str(&format!("  Foreign Born: {}\n", display(&sample.foreign_born)));
        out.push_str(&format!("  Latino: {}\n", display(&sample.latino)));
        out.push_str(&format!("  White: {}\n", display(&sample.white)));
        out.push_str(&format!("  Black: {}\n", display(&sample.black)));
        out.push_str(&format!("  Asian: {}\n", display(&sample.asian)));
    }
    out
}

/// Strings print bare; everything else prints as JSON.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SampleFeature;
    use serde_json::json;

    #[test]
    fn test_header_listing_shows_padded_names() {
        let report = HeaderReport {
            columns: vec!["CDTFA_CITY".into(), " Other ".into(), "Total Pop".into()],
            city_column: "CDTFA_CITY".into(),
            total_columns: vec![2],
            ..Default::default()
        };
        let text = render_header_report(&report);
        assert!(text.contains("  [ 1] \" Other \""));
        assert!(text.contains("Using \"CDTFA_CITY\" column for matching"));
        assert!(text.contains("Found 1 column(s) containing 'Total':"));
        assert!(text.contains("No 'Foreign' column"));
    }

    #[test]
    fn test_header_listing_duplicate_foreign() {
        let report = HeaderReport {
            columns: vec!["CDTFA_CITY".into(), "Foreign".into(), "Foreign".into()],
            city_column: "CDTFA_CITY".into(),
            foreign_indices: vec![1, 2],
            duplicates: [("Foreign".to_string(), 2)].into_iter().collect(),
            ..Default::default()
        };
        let text = render_header_report(&report);
        assert!(text.contains("\"Foreign\" appears 2 times"));
        assert!(text.contains("Found 'Foreign' column at index 1"));
        assert!(text.contains("indices [1, 2]; using the first"));
    }

    #[test]
    fn test_merge_stats_truncated_listing() {
        let mut stats = MergeStats::default();
        for i in 0..25 {
            stats.record_unmatched(&format!("Ghost {i}"), 20);
        }
        let text = render_merge_stats(&stats);
        assert!(text.contains("Unmatched: 25"));
        assert!(text.contains("(showing first 20 of 25)"));
        assert!(text.contains("    - Ghost 19"));
        assert!(!text.contains("Ghost 20"));
    }

    #[test]
    fn test_merge_stats_heading_follows_listed_names() {
        let mut stats = MergeStats::default();
        for i in 0..8 {
            stats.record_unmatched(&format!("Ghost {i}"), 5);
        }
        let text = render_merge_stats(&stats);
        assert!(text.contains("(showing first 5 of 8)"));

        let mut few = MergeStats::default();
        few.record_unmatched("Ghost Town", 5);
        few.record_unmatched("Nowhere", 5);
        let text = render_merge_stats(&few);
        assert!(text.contains("Unmatched city names (first 2):"));
        assert!(!text.contains("first 20"));
    }

    #[test]
    fn test_merge_stats_all_matched() {
        let stats = MergeStats { total_features: 3, matched: 3, ..Default::default() };
        let text = render_merge_stats(&stats);
        assert!(text.contains("Matched: 3"));
        assert!(!text.contains("Unmatched city names"));
    }

    #[test]
    fn test_verify_summary_sample() {
        let summary = VerifySummary {
            total_features: 2,
            with_demographics: 1,
            sample: Some(SampleFeature {
                name: json!("Anytown city"),
                population: json!(1000),
                foreign_born: json!(50),
                latino: Value::Null,
                white: json!(12.5),
                black: json!("N/A"),
                asian: Value::Null,
            }),
        };
        let text = render_verify_summary(&summary);
        assert!(text.contains("Features with demographic data: 1"));
        assert!(text.contains("Sample matched feature: Anytown city"));
        assert!(text.contains("  Population: 1000"));
        assert!(text.contains("  Latino: null"));
        assert!(text.contains("  Black: N/A"));
    }
}
