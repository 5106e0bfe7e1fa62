//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::collections::BTreeMap;

use terminal_size::{terminal_size, Width};

use crate::graph::{Distance, Edge, Graph, NodeId};
use crate::leaderboard::Leaderboard;
use crate::race::RaceResult;
use crate::registry::{Catalog, Category};
use crate::trace::{BellmanFordStep, DijkstraStep};
use crate::utils::runner::RoundsReport;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// `{0: 0, 1: 5, 2: ∞}`
fn format_distances(distances: &BTreeMap<NodeId, Distance>) -> String {
    let parts: Vec<String> = distances
        .iter()
        .map(|(node, d)| format!("{}: {}", node, d))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

fn format_edges(edges: &[Edge]) -> String {
    if edges.is_empty() {
        return "-".to_string();
    }
    edges
        .iter()
        .map(|e| format!("{}->{} ({})", e.source, e.target, e.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Algorithm Race ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: algo-race [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list, -l          List categories and algorithms");
    println!("  --help, -h          Show this help message");
    println!("  --category CAT      sorting | pathfinding | mst | dp (default: sorting)");
    println!("  --algos A,B         Two algorithm ids (default: first two of the category)");
    println!("  --size N            Data size (default: 1000)");
    println!("  --rounds N          Number of races (default: 1)");
    println!("  --seed N            Random seed for reproducible workloads (default: OS entropy)");
    println!("  --csv PATH          Export the leaderboard to CSV");
    println!("  --json PATH         Export the race history to JSON");
    println!("  --trace ALGO        Print a step trace (dijkstra | bellman-ford) on a random graph");
    println!("  --nodes N           Trace graph size (default: 6)");
    println!("  --density D         Trace graph edge density in [0, 1] (default: 0.3)");
    println!();
    println!("Log verbosity is read from RUST_LOG (default: warn).");
    println!();
    println!("Examples:");
    println!("  algo-race --category sorting --algos quickSort,heapSort --size 5000");
    println!("  algo-race --category mst --rounds 10 --csv board.csv");
    println!("  algo-race --trace dijkstra --nodes 8 --seed 42");
}

/// Print every category with its algorithms
pub fn print_catalog(catalog: &Catalog) {
    for category in Category::ALL {
        println!("{} [{}]", category.title(), category);
        println!("  {}", category.description());
        for d in catalog.describe(category) {
            println!(
                "    {:<20} {:<24} time {:<14} space {}",
                d.id, d.name, d.complexity, d.space_complexity
            );
        }
        println!();
    }
}

/// Print one race outcome as a box
pub fn print_race_result(result: &RaceResult) {
    let term_width = get_term_width();
    let content_width = term_width.saturating_sub(4).clamp(40, 76);
    let border = "─".repeat(content_width + 2);

    let mut lines = vec![
        format!("Race #{}  [{}]  size {}", result.id, result.category, result.data_size),
        String::new(),
    ];
    for c in &result.algorithms {
        let marker = if c.id == result.winner { "*" } else { " " };
        lines.push(format!(
            "{} {:<24} {:>12.4} ms   {}",
            marker, c.name, c.time, c.complexity
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Winner: {} by {:.2} ms ({:.1}%)",
        result.winner().name,
        result.time_difference,
        result.percentage_difference
    ));

    println!("┌{}┐", border);
    for line in lines {
        println!(
            "│ {:<width$} │",
            truncate(&line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print the aggregate of a batch of races
pub fn print_rounds_summary(report: &RoundsReport) {
    println!(
        "  {} rounds: {} won {}, {} won {}",
        report.results.len(),
        report.first,
        report.first_wins,
        report.second,
        report.second_wins
    );
    for (id, stats) in [
        (&report.first, &report.first_stats),
        (&report.second, &report.second_stats),
    ] {
        if let Some(s) = stats {
            println!(
                "  {:<20} mean {:>10.4} ms  median {:>10.4} ms  min {:>10.4} ms  max {:>10.4} ms  sd {:>8.4}",
                id, s.mean_ms, s.median_ms, s.min_ms, s.max_ms, s.std_dev_ms
            );
        }
    }
    println!();
}

/// Print the ranked leaderboard of one category
pub fn print_leaderboard(leaderboard: &Leaderboard, category: Category) {
    let ranked = leaderboard.rank(category);
    if ranked.is_empty() {
        println!("  No races in '{}' yet.", category);
        return;
    }

    let term_width = get_term_width();
    let name_width = term_width.saturating_sub(56).clamp(12, 30);
    let table_width = name_width + 52;

    println!("  Leaderboard: {}", category.title());
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<4} {:<n_width$} {:>12} {:>6} {:>6} {:<16}",
        "Rank",
        "Algorithm",
        "Avg. Time",
        "Wins",
        "Runs",
        "Complexity",
        n_width = name_width
    );
    println!("  {}", "─".repeat(table_width));
    for (index, entry) in ranked.iter().enumerate() {
        println!(
            "  {:<4} {:<n_width$} {:>9.2} ms {:>6} {:>6} {:<16}",
            index + 1,
            truncate(&entry.name, name_width),
            entry.avg_time,
            entry.wins,
            entry.runs,
            entry.complexity,
            n_width = name_width
        );
    }
    println!("  {}", "─".repeat(table_width));

    if let (Some(fastest), Some(most_wins)) =
        (leaderboard.fastest(category), leaderboard.most_wins(category))
    {
        println!(
            "  Fastest: {} ({:.2} ms)   Most wins: {} ({})",
            fastest.name, fastest.avg_time, most_wins.name, most_wins.wins
        );
    }
    println!();
}

/// Print the nodes and edges a trace runs on
pub fn print_graph(graph: &Graph) {
    println!(
        "  Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("  Edges: {}", format_edges(&graph.edges));
    println!();
}

pub fn print_dijkstra_trace(steps: &[DijkstraStep]) {
    for (index, step) in steps.iter().enumerate() {
        let current = step
            .current
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  Step {:>3}  current {:>3}  visited {:?}", index, current, step.visited);
        println!("            distances {}", format_distances(&step.distances));
        println!("            relaxed   {}", format_edges(&step.relaxed_edges));
    }
    println!();
}

pub fn print_bellman_ford_trace(steps: &[BellmanFordStep]) {
    for (index, step) in steps.iter().enumerate() {
        println!("  Step {:>3}  iteration {:>3}", index, step.iteration);
        println!("            distances {}", format_distances(&step.distances));
        println!("            relaxed   {}", format_edges(&step.relaxed_edges));
        if let Some(check) = &step.cycle_check {
            if check.has_negative_cycle {
                println!(
                    "            negative cycle via {}",
                    format_edges(&check.negative_cycle_edges)
                );
            } else {
                println!("            no negative cycle");
            }
        }
    }
    println!();
}
