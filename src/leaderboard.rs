//! Per-category running statistics of race competitors.
//!
//! Entries are created the first time an algorithm races in a category and
//! updated after every later race. Rankings are derived from the entries on
//! demand; nothing else is stored.

use serde::Serialize;

use crate::race::RaceResult;
use crate::registry::Category;

/// Aggregated statistics of one algorithm in one category.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub category: Category,
    pub algorithm_id: String,
    pub name: String,
    pub runs: u64,
    /// Sum of all timed runs in milliseconds
    pub total_time: f64,
    /// `total_time / runs`
    pub avg_time: f64,
    pub wins: u64,
    pub complexity: String,
    pub space_complexity: String,
}

/// Leaderboard over every category, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one race into the entries of both competitors.
    ///
    /// A missing entry starts at one run; an existing one gains a run, the
    /// race time, a recomputed average and a win if it was the winner.
    pub fn update(&mut self, result: &RaceResult) {
        for competitor in &result.algorithms {
            let won = u64::from(competitor.id == result.winner);
            match self.position(result.category, &competitor.id) {
                Some(index) => {
                    let entry = &mut self.entries[index];
                    entry.runs += 1;
                    entry.total_time += competitor.time;
                    entry.avg_time = entry.total_time / entry.runs as f64;
                    entry.wins += won;
                }
                None => self.entries.push(LeaderboardEntry {
                    category: result.category,
                    algorithm_id: competitor.id.clone(),
                    name: competitor.name.clone(),
                    runs: 1,
                    total_time: competitor.time,
                    avg_time: competitor.time,
                    wins: won,
                    complexity: competitor.complexity.clone(),
                    space_complexity: competitor.space_complexity.clone(),
                }),
            }
        }
    }

    /// Entries of `category` from fastest to slowest average. Equal averages
    /// keep first-seen order.
    pub fn rank(&self, category: Category) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self
            .entries
            .iter()
            .filter(|e| e.category == category)
            .collect();
        ranked.sort_by(|a, b| a.avg_time.total_cmp(&b.avg_time));
        ranked
    }

    /// Lowest average time in `category`.
    pub fn fastest(&self, category: Category) -> Option<&LeaderboardEntry> {
        self.rank(category).into_iter().next()
    }

    /// Highest win count in `category`; the faster entry wins a tie.
    pub fn most_wins(&self, category: Category) -> Option<&LeaderboardEntry> {
        self.rank(category)
            .into_iter()
            .fold(None, |best: Option<&LeaderboardEntry>, entry| match best {
                Some(b) if b.wins >= entry.wins => Some(b),
                _ => Some(entry),
            })
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn entry(&self, category: Category, algorithm_id: &str) -> Option<&LeaderboardEntry> {
        self.position(category, algorithm_id)
            .map(|index| &self.entries[index])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        tracing::info!(entries = self.entries.len(), "leaderboard reset");
        self.entries.clear();
    }

    fn position(&self, category: Category, algorithm_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.category == category && e.algorithm_id == algorithm_id)
    }
}
