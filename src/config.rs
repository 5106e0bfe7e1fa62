//! Race configuration and hard input caps.

use crate::registry::Category;

/// Largest `n` handed to the naive recursive Fibonacci.
pub const FIB_RECURSIVE_CAP: usize = 30;
/// Largest `n` handed to the tabulated Fibonacci.
pub const FIB_TABULATED_CAP: usize = 1000;
/// Largest item count handed to the naive recursive knapsack.
pub const KNAPSACK_RECURSIVE_CAP: usize = 20;
/// Largest item count handed to the tabulated knapsack.
pub const KNAPSACK_TABULATED_CAP: usize = 500;

/// Node ceiling for generated race graphs.
pub const GRAPH_NODE_CAP: usize = 500;
/// Edge ceiling for generated race graphs.
pub const GRAPH_EDGE_CAP: usize = 2000;

/// Configuration for an [`Arena`](crate::race::Arena).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceConfig {
    /// Number of race results kept in the history (default: 10)
    pub history_limit: usize,
    /// Untimed runs of each competitor before the timed run (default: 0)
    pub warmup_iterations: usize,
    /// Largest accepted data size (default: 10 000)
    pub max_data_size: usize,
    /// Largest accepted data size for dynamic programming races (default:
    /// 1000). The tabulated knapsack table grows with the square of the size.
    pub max_dp_size: usize,
    /// Seed for workload generation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            history_limit: 10,
            warmup_iterations: 0,
            max_data_size: 10_000,
            max_dp_size: 1000,
            seed: None,
        }
    }
}

impl RaceConfig {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_warmup_iterations(mut self, iterations: usize) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    pub fn with_max_data_size(mut self, size: usize) -> Self {
        self.max_data_size = size;
        self
    }

    pub fn with_max_dp_size(mut self, size: usize) -> Self {
        self.max_dp_size = size;
        self
    }

    /// Largest accepted data size for races in `category`.
    pub fn size_limit(&self, category: Category) -> usize {
        match category {
            Category::Dp => self.max_data_size.min(self.max_dp_size),
            _ => self.max_data_size,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
