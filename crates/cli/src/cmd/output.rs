//! Report formatting.

use tabled::{Table, Tabled, settings::Style};
use vaultdist_core::DistributionReport;

/// Row for the per-repository table.
#[derive(Tabled)]
struct RepoRow {
    #[tabled(rename = "Arm")]
    arm: String,
    #[tabled(rename = "Notes")]
    notes: usize,
    #[tabled(rename = "Docs")]
    docs: String,
}

/// Print the human-readable summary.
pub fn print_report(report: &DistributionReport) {
    println!("Distributed notes into:");
    for repo in &report.repos {
        println!(" - {}: {}", repo.arm, repo.docs_path.display());
    }

    println!();
    let rows: Vec<RepoRow> = report
        .repos
        .iter()
        .map(|r| RepoRow {
            arm: r.arm.to_string(),
            notes: r.notes_copied,
            docs: r.docs_path.display().to_string(),
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));

    println!(
        "{} notes found, {} copied, {} skipped, {} with unreadable frontmatter",
        report.files_found,
        report.total_notes_copied(),
        report.notes_skipped,
        report.header_errors,
    );
    if !report.asset_dirs.is_empty() {
        println!(
            "assets: {} ({} files copied)",
            report.asset_dirs.join(", "),
            report.asset_files_copied
        );
    }
}

/// Print the report as JSON.
pub fn print_report_json(report: &DistributionReport) {
    println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
}
