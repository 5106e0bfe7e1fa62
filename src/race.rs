//! Head-to-head races between two algorithms of one category.
//!
//! An [`Arena`] owns the catalog, the leaderboard and a bounded race history.
//! A race validates its selection, generates one workload, runs the first
//! competitor and then the second on it, and records the outcome. Races take
//! `&mut self`, so one arena runs one race at a time; share an arena across
//! threads behind a `Mutex`.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::RaceConfig;
use crate::error::RaceError;
use crate::leaderboard::Leaderboard;
use crate::registry::{build_catalog, Catalog, Category, Descriptor, Execution, Outcome};
use crate::utils::timer::round_to;
use crate::workload::{generate, Workload};

/// One side of a race.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    pub name: String,
    /// Measured time in milliseconds
    pub time: f64,
    pub complexity: String,
    pub space_complexity: String,
}

impl Competitor {
    pub fn new(descriptor: &Descriptor, time: f64) -> Self {
        Self {
            id: descriptor.id.to_string(),
            name: descriptor.name.to_string(),
            time,
            complexity: descriptor.complexity.to_string(),
            space_complexity: descriptor.space_complexity.to_string(),
        }
    }
}

/// Outcome of one race. Never modified after creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Creation time in milliseconds since the Unix epoch, strictly
    /// increasing within one arena
    pub id: u64,
    pub category: Category,
    pub data_size: usize,
    /// Competitors in dispatch order
    pub algorithms: [Competitor; 2],
    /// Id of the strictly faster competitor, or of the first on a tie
    pub winner: String,
    /// `|t1 - t2|` in milliseconds, 2 decimals
    pub time_difference: f64,
    /// Difference relative to the slower time, in percent, 1 decimal
    pub percentage_difference: f64,
}

impl RaceResult {
    /// Assemble a result from two measured competitors.
    ///
    /// # Example
    /// ```
    /// use algo_race::race::{Competitor, RaceResult};
    /// use algo_race::registry::Category;
    ///
    /// let side = |id: &str, time| Competitor {
    ///     id: id.to_string(),
    ///     name: id.to_string(),
    ///     time,
    ///     complexity: "O(n)".to_string(),
    ///     space_complexity: "O(1)".to_string(),
    /// };
    /// let result = RaceResult::from_timings(1, Category::Sorting, 10, side("a", 4.0), side("b", 3.0));
    /// assert_eq!(result.winner, "b");
    /// assert_eq!(result.time_difference, 1.0);
    /// assert_eq!(result.percentage_difference, 25.0);
    /// ```
    pub fn from_timings(
        id: u64,
        category: Category,
        data_size: usize,
        first: Competitor,
        second: Competitor,
    ) -> Self {
        let winner = if second.time < first.time {
            second.id.clone()
        } else {
            first.id.clone()
        };
        let difference = (first.time - second.time).abs();
        let slower = first.time.max(second.time);
        let percentage = if slower > 0.0 {
            difference / slower * 100.0
        } else {
            0.0
        };

        Self {
            id,
            category,
            data_size,
            algorithms: [first, second],
            winner,
            time_difference: round_to(difference, 2),
            percentage_difference: round_to(percentage, 1),
        }
    }

    pub fn winner(&self) -> &Competitor {
        self.algorithms
            .iter()
            .find(|c| c.id == self.winner)
            .unwrap_or(&self.algorithms[0])
    }
}

/// Race orchestrator with its leaderboard and history.
pub struct Arena {
    catalog: Catalog,
    leaderboard: Leaderboard,
    history: VecDeque<RaceResult>,
    config: RaceConfig,
    rng: StdRng,
    last_id: u64,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(RaceConfig::default())
    }
}

impl Arena {
    /// Create an arena over the default catalog.
    pub fn new(config: RaceConfig) -> Self {
        Self::with_catalog(build_catalog(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: RaceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            leaderboard: Leaderboard::new(),
            history: VecDeque::with_capacity(config.history_limit),
            config,
            rng,
            last_id: 0,
        }
    }

    /// Race `first` against `second` on one workload of `data_size`.
    ///
    /// The selection is validated before anything runs. On error the
    /// history and the leaderboard are unchanged.
    pub fn race(
        &mut self,
        category: Category,
        first: &str,
        second: &str,
        data_size: usize,
    ) -> Result<RaceResult, RaceError> {
        let (first_desc, second_desc) = self.validate(category, first, second, data_size)?;
        tracing::debug!(%category, first, second, data_size, "starting race");

        let workload = generate(category, data_size, &mut self.rng);
        for _ in 0..self.config.warmup_iterations {
            self.execute(category, first, &workload)?;
            self.execute(category, second, &workload)?;
        }
        let first_run = self.execute(category, first, &workload)?;
        let second_run = self.execute(category, second, &workload)?;

        let result = RaceResult::from_timings(
            self.next_id(),
            category,
            data_size,
            Competitor::new(&first_desc, first_run.time_ms),
            Competitor::new(&second_desc, second_run.time_ms),
        );
        tracing::debug!(
            winner = %result.winner,
            time_difference = result.time_difference,
            percentage_difference = result.percentage_difference,
            "race finished"
        );

        self.history.push_front(result.clone());
        self.history.truncate(self.config.history_limit);
        self.leaderboard.update(&result);
        Ok(result)
    }

    /// [`Arena::race`] with the category given by name.
    pub fn race_named(
        &mut self,
        category: &str,
        first: &str,
        second: &str,
        data_size: usize,
    ) -> Result<RaceResult, RaceError> {
        let category = category.parse::<Category>().inspect_err(|err| {
            tracing::warn!(%err, "race rejected");
        })?;
        self.race(category, first, second, data_size)
    }

    /// Recent races, newest first.
    pub fn history(&self) -> &VecDeque<RaceResult> {
        &self.history
    }

    pub fn last_result(&self) -> Option<&RaceResult> {
        self.history.front()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Forget the history and the leaderboard.
    pub fn reset(&mut self) {
        self.history.clear();
        self.leaderboard.reset();
    }

    fn validate(
        &self,
        category: Category,
        first: &str,
        second: &str,
        data_size: usize,
    ) -> Result<(Descriptor, Descriptor), RaceError> {
        self.check_selection(category, first, second, data_size)
            .inspect_err(|err| {
                tracing::warn!(%category, first, second, data_size, %err, "race rejected");
            })
    }

    fn check_selection(
        &self,
        category: Category,
        first: &str,
        second: &str,
        data_size: usize,
    ) -> Result<(Descriptor, Descriptor), RaceError> {
        let lookup = |id: &str| {
            self.catalog
                .descriptor(category, id)
                .ok_or_else(|| RaceError::UnknownAlgorithm {
                    category: category.to_string(),
                    id: id.to_string(),
                })
        };
        let pair = (lookup(first)?, lookup(second)?);

        if data_size == 0 {
            return Err(RaceError::EmptyWorkload);
        }
        let limit = self.config.size_limit(category);
        if data_size > limit {
            return Err(RaceError::DataSizeTooLarge {
                requested: data_size,
                limit,
            });
        }
        Ok(pair)
    }

    /// Run one algorithm, turning a panic into [`RaceError::ExecutionFailed`].
    fn execute(
        &self,
        category: Category,
        id: &str,
        workload: &Workload,
    ) -> Result<Execution<Outcome>, RaceError> {
        let catalog = &self.catalog;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| catalog.run(category, id, workload)));
        match outcome {
            Ok(execution) => {
                if let Ok(run) = &execution {
                    tracing::debug!(%category, id, time_ms = run.time_ms, "executed");
                }
                execution
            }
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(%category, id, %reason, "algorithm execution failed");
                Err(RaceError::ExecutionFailed {
                    id: id.to_string(),
                    reason,
                })
            }
        }
    }

    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
