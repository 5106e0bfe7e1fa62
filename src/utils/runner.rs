//! Batch races and result export (CSV leaderboard, JSON history).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RaceError;
use crate::leaderboard::Leaderboard;
use crate::race::{Arena, RaceResult};
use crate::registry::Category;
use crate::utils::timer::{compute_stats, TimingStats};

/// Outcome of several races between the same two algorithms.
///
/// Wins are counted per side the way the leaderboard counts them: a round
/// won by `first` credits `first_wins` and a round won by `second` credits
/// `second_wins`. In a self-race both ids are the same, so every round
/// credits both sides and the two counts add up to twice the rounds.
#[derive(Clone, Debug)]
pub struct RoundsReport {
    pub category: Category,
    pub first: String,
    pub second: String,
    /// Results in the order they were run
    pub results: Vec<RaceResult>,
    pub first_wins: usize,
    pub second_wins: usize,
    pub first_stats: Option<TimingStats>,
    pub second_stats: Option<TimingStats>,
}

/// Race `first` against `second` `rounds` times, each on a fresh workload.
///
/// Stops at the first failed race; the races before it stay recorded in the
/// arena.
pub fn run_rounds(
    arena: &mut Arena,
    category: Category,
    first: &str,
    second: &str,
    size: usize,
    rounds: usize,
) -> Result<RoundsReport, RaceError> {
    let mut results = Vec::with_capacity(rounds);
    for round in 0..rounds {
        tracing::debug!(round, "running round");
        results.push(arena.race(category, first, second, size)?);
    }

    let times = |side: usize| -> Vec<f64> { results.iter().map(|r| r.algorithms[side].time).collect() };
    let first_wins = results.iter().filter(|r| r.winner == first).count();
    let second_wins = results.iter().filter(|r| r.winner == second).count();

    Ok(RoundsReport {
        category,
        first: first.to_string(),
        second: second.to_string(),
        first_stats: compute_stats(&times(0)),
        second_stats: compute_stats(&times(1)),
        first_wins,
        second_wins,
        results,
    })
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Export every leaderboard entry to a CSV file
pub fn export_csv(path: impl AsRef<Path>, leaderboard: &Leaderboard) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(
        file,
        "category,algorithm,name,runs,wins,avg_time_ms,total_time_ms,complexity,space_complexity"
    )?;

    for entry in leaderboard.entries() {
        writeln!(
            file,
            "{},{},{},{},{},{:.4},{:.4},{},{}",
            entry.category,
            csv_field(&entry.algorithm_id),
            csv_field(&entry.name),
            entry.runs,
            entry.wins,
            entry.avg_time,
            entry.total_time,
            csv_field(&entry.complexity),
            csv_field(&entry.space_complexity)
        )?;
    }

    file.flush()
}

/// Export race results, newest first, as a JSON array
pub fn export_json<'a>(
    path: impl AsRef<Path>,
    history: impl IntoIterator<Item = &'a RaceResult>,
) -> std::io::Result<()> {
    let results: Vec<&RaceResult> = history.into_iter().collect();
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, &results)?;
    writeln!(file)?;
    file.flush()
}
