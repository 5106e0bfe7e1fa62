//! # Algo-Race
//!
//! Classical algorithms two ways:
//!
//! - **Step traces** ([`trace`]): Dijkstra, Bellman-Ford, sorting, binary
//!   search, N-Queens and Fibonacci tabulation, each returning every
//!   intermediate state as an owned snapshot for replay.
//! - **Races** ([`race`]): two algorithms of one family timed on the same
//!   random workload, with the outcome kept in a bounded history and folded
//!   into a per-category [`leaderboard`].

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod leaderboard;
pub mod race;
pub mod registry;
pub mod trace;
pub mod utils;
pub mod workload;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::RaceConfig;
    pub use crate::error::{GraphError, RaceError, RegistryError};
    pub use crate::graph::{create_random_graph, Distance, Edge, Graph, Node, NodeId};
    pub use crate::leaderboard::{Leaderboard, LeaderboardEntry};
    pub use crate::race::{Arena, Competitor, RaceResult};
    pub use crate::registry::{build_catalog, Algorithm, Catalog, Category, Descriptor, Outcome};
    pub use crate::trace::{run_bellman_ford, run_dijkstra, BellmanFordStep, DijkstraStep};
    pub use crate::workload::{DpWorkload, Workload};
}
