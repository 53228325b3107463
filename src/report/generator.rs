//! Report rendering.
//!
//! This module renders an [`EmissionsReport`] as console text, Markdown,
//! or JSON.

use crate::models::{EmissionsReport, IndustryTotal, RankedEntry, ReportMetadata};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

const INDUSTRY_HEADER: &str = "industry";
const TOTAL_HEADER: &str = "total_emissions";
const RANK_HEADER: &str = "emissions_rank";

/// Generate the plain text console report.
pub fn generate_text_report(report: &EmissionsReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", year_label(report), report.year));

    output.push_str(&format!(
        "\nTotal emissions by industry ({}):\n",
        year_phrase(report)
    ));
    output.push_str(&totals_table(&report.totals));

    output.push_str(&format!(
        "\nTop {} highest emitting industries:\n",
        report.top_n
    ));
    output.push_str(&ranked_table(&report.top));

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &EmissionsReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Top {} Highest Emitting Industries ({})\n\n",
        report.top_n, report.year
    ));

    output.push_str(&generate_metadata_section(&report.metadata, report));
    output.push_str(&generate_top_section(report));
    output.push_str(&generate_totals_section(report));
    output.push_str(&generate_footer());

    output
}

/// Generate a JSON report.
pub fn generate_json_report(report: &EmissionsReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

fn year_label(report: &EmissionsReport) -> &'static str {
    if report.is_latest_year {
        "Most recent year"
    } else {
        "Selected year"
    }
}

fn year_phrase(report: &EmissionsReport) -> String {
    if report.is_latest_year {
        "most recent year".to_string()
    } else {
        report.year.to_string()
    }
}

fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

/// Aligned two-column table of industry totals.
fn totals_table(totals: &[IndustryTotal]) -> String {
    if totals.is_empty() {
        return "(no records)\n".to_string();
    }

    let industry_width = column_width(INDUSTRY_HEADER, totals.iter().map(|t| t.industry.len()));
    let total_width = column_width(
        TOTAL_HEADER,
        totals.iter().map(|t| format_total(t.total).len()),
    );

    let mut table = format!(
        "{:<iw$}  {:>tw$}\n",
        INDUSTRY_HEADER,
        TOTAL_HEADER,
        iw = industry_width,
        tw = total_width
    );
    for total in totals {
        table.push_str(&format!(
            "{:<iw$}  {:>tw$}\n",
            total.industry,
            format_total(total.total),
            iw = industry_width,
            tw = total_width
        ));
    }

    table
}

/// Aligned three-column table of ranked entries.
fn ranked_table(entries: &[RankedEntry]) -> String {
    if entries.is_empty() {
        return "(no records)\n".to_string();
    }

    let industry_width = column_width(INDUSTRY_HEADER, entries.iter().map(|e| e.industry.len()));
    let total_width = column_width(
        TOTAL_HEADER,
        entries.iter().map(|e| format_total(e.total).len()),
    );
    let rank_width = RANK_HEADER.len();

    let mut table = format!(
        "{:<iw$}  {:>tw$}  {:>rw$}\n",
        INDUSTRY_HEADER,
        TOTAL_HEADER,
        RANK_HEADER,
        iw = industry_width,
        tw = total_width,
        rw = rank_width
    );
    for entry in entries {
        table.push_str(&format!(
            "{:<iw$}  {:>tw$}  {:>rw$}\n",
            entry.industry,
            format_total(entry.total),
            entry.rank,
            iw = industry_width,
            tw = total_width,
            rw = rank_width
        ));
    }

    table
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.fold(header.len(), usize::max)
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata, report: &EmissionsReport) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** `{}`\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Records Loaded:** {}\n", metadata.records_loaded));
    section.push_str(&format!("- **{}:** {}\n", year_label(report), report.year));
    section.push_str(&format!(
        "- **Industries Reporting:** {}\n",
        metadata.industries_in_year
    ));
    section.push_str(&format!(
        "- **Total Emissions:** {} MtCO2e\n",
        format_total(report.grand_total())
    ));
    section.push('\n');

    section
}

/// Generate the top-N ranking section.
fn generate_top_section(report: &EmissionsReport) -> String {
    let mut section = String::new();

    section.push_str(&format!("## Top {} Industries\n\n", report.top_n));

    if report.top.is_empty() {
        section.push_str("No industries reported emissions for this year.\n\n");
        return section;
    }

    section.push_str("| Rank | Industry | Emissions (MtCO2e) |\n");
    section.push_str("|:---:|:---|---:|\n");
    for entry in &report.top {
        section.push_str(&format!(
            "| {} | {} | {} |\n",
            entry.rank,
            entry.industry,
            format_total(entry.total)
        ));
    }

    if report.top.len() > report.top_n {
        section.push_str(&format!(
            "\n*{} industries listed: ties at the cutoff share a rank.*\n",
            report.top.len()
        ));
    }
    section.push('\n');

    section
}

/// Generate the per-industry totals section.
fn generate_totals_section(report: &EmissionsReport) -> String {
    let mut section = String::new();

    section.push_str("## Total Emissions by Industry\n\n");
    section.push_str("| Industry | Emissions (MtCO2e) |\n");
    section.push_str("|:---|---:|\n");
    for total in &report.totals {
        section.push_str(&format!(
            "| {} | {} |\n",
            total.industry,
            format_total(total.total)
        ));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by emrank*\n");

    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_report() -> EmissionsReport {
        let totals = vec![
            IndustryTotal {
                industry: "Power".to_string(),
                total: 80.0,
            },
            IndustryTotal {
                industry: "Oil".to_string(),
                total: 70.0,
            },
        ];
        let ranked = vec![
            RankedEntry {
                industry: "Power".to_string(),
                total: 80.0,
                rank: 1,
            },
            RankedEntry {
                industry: "Oil".to_string(),
                total: 70.0,
                rank: 2,
            },
        ];

        EmissionsReport {
            metadata: ReportMetadata {
                source: "emissions.csv".to_string(),
                generated_at: Utc::now(),
                records_loaded: 4,
                industries_in_year: 2,
            },
            year: 2023,
            is_latest_year: true,
            totals,
            ranked: ranked.clone(),
            top_n: 5,
            top: ranked,
        }
    }

    #[test]
    fn test_generate_text_report() {
        let text = generate_text_report(&create_test_report());

        assert!(text.starts_with("Most recent year: 2023\n"));
        assert!(text.contains("Total emissions by industry (most recent year):"));
        assert!(text.contains("Top 5 highest emitting industries:"));
        assert!(text.contains("industry  total_emissions  emissions_rank"));
        assert!(text.contains("Power               80.00               1"));
    }

    #[test]
    fn test_text_report_for_selected_year() {
        let mut report = create_test_report();
        report.is_latest_year = false;
        report.year = 2022;

        let text = generate_text_report(&report);
        assert!(text.starts_with("Selected year: 2022\n"));
        assert!(text.contains("Total emissions by industry (2022):"));
    }

    #[test]
    fn test_totals_table_alignment() {
        let table = totals_table(&[
            IndustryTotal {
                industry: "Transportation".to_string(),
                total: 1100.0,
            },
            IndustryTotal {
                industry: "Oil".to_string(),
                total: 5.5,
            },
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[2].starts_with("Oil "));
        assert!(lines[2].ends_with("5.50"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(totals_table(&[]), "(no records)\n");
        assert_eq!(ranked_table(&[]), "(no records)\n");
    }

    #[test]
    fn test_generate_markdown_report() {
        let markdown = generate_markdown_report(&create_test_report());

        assert!(markdown.contains("# Top 5 Highest Emitting Industries (2023)"));
        assert!(markdown.contains("## Metadata"));
        assert!(markdown.contains("- **Records Loaded:** 4"));
        assert!(markdown.contains("- **Total Emissions:** 150.00 MtCO2e"));
        assert!(markdown.contains("| 1 | Power | 80.00 |"));
        assert!(markdown.contains("| Oil | 70.00 |"));
        assert!(!markdown.contains("ties at the cutoff"));
    }

    #[test]
    fn test_markdown_notes_boundary_ties() {
        let mut report = create_test_report();
        report.top_n = 1;
        report.top[1].rank = 1;

        let markdown = generate_markdown_report(&report);
        assert!(markdown.contains("2 industries listed: ties at the cutoff share a rank."));
    }

    #[test]
    fn test_generate_json_report() {
        let json = generate_json_report(&create_test_report()).unwrap();

        assert!(json.contains("\"year\": 2023"));
        assert!(json.contains("\"top\""));
        assert!(json.contains("\"rank\": 1"));
        assert!(json.contains("\"records_loaded\": 4"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_report("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
