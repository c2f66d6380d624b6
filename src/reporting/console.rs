// src/reporting/console.rs
//! Console output for analysis results.

use colored::Colorize;

use super::shared::{bar, duration, pluralize};
use crate::analysis::AnalysisReport;
use crate::graph::{CentralityScores, CommunityPartition};

const BAR_WIDTH: usize = 20;

/// Prints a full report: summary, centrality rankings and communities.
pub fn print_report(report: &AnalysisReport, top: usize) {
    print_summary(report);

    if report.is_empty() {
        println!("{}", "  No ingredient pairs found; nothing to rank.".yellow());
        return;
    }

    println!(
        "\n{} (edges with weight ≥ {})",
        "CENTRALITY".cyan().bold(),
        report.strong_graph.min_weight
    );
    if report.strong_graph.edges.is_empty() {
        println!("  {}", "No pair reaches the threshold.".dimmed());
    } else {
        print_ranking("Degree", &report.centrality.degree, top);
        print_ranking("Closeness", &report.centrality.closeness, top);
        print_ranking("Betweenness", &report.centrality.betweenness, top);
    }

    print_communities(&report.communities);
}

fn print_summary(report: &AnalysisReport) {
    let unmatched = report.unmatched_segments();
    println!(
        "\n{} {} {} | {} ingredients | {} | {} edges (weight ≥ {}) in {:.2?}",
        "RECETARIO".cyan().bold(),
        report.segments,
        pluralize("segment", report.segments),
        report.cooccurrence.len(),
        format_unmatched(unmatched),
        report.graph.edge_count(),
        report.graph.min_weight,
        duration(report),
    );
}

fn format_unmatched(n: usize) -> String {
    let label = format!("{n} without matches");
    if n == 0 {
        label.green().to_string()
    } else {
        label.yellow().to_string()
    }
}

fn print_ranking(label: &str, scores: &CentralityScores, top: usize) {
    println!("\n{} {}", "▸".yellow(), label.yellow().bold());
    for (name, score) in scores.top(top) {
        println!("    {:<22} {} {:.3}", name, bar(score, BAR_WIDTH).blue(), score);
    }
}

fn print_communities(partition: &CommunityPartition) {
    let count = partition.community_count();
    println!(
        "\n{} {} {} | modularity {:.4}",
        "COMMUNITIES".cyan().bold(),
        count,
        if count == 1 { "community" } else { "communities" },
        partition.modularity,
    );

    for (id, members) in partition.communities().iter().enumerate() {
        println!("  {} {}", format!("[{id}]").magenta(), members.join(", "));
    }

    if !partition.converged {
        println!(
            "  {}",
            format!(
                "⚠ did not fully converge after {} rounds; showing best partition found",
                partition.rounds
            )
            .yellow()
        );
    }
}
