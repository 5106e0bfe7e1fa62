//! Error types shared across the crate.

use thiserror::Error;

use crate::graph::NodeId;

/// Reasons a race is refused or fails.
///
/// Everything except [`RaceError::ExecutionFailed`] is a selection problem
/// detected before any workload is generated, so a refused race never
/// touches the history or the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    /// The category name does not match any algorithm family.
    #[error("invalid selection: unknown category '{0}'")]
    UnknownCategory(String),

    /// The algorithm id is not registered in the category.
    #[error("invalid selection: unknown algorithm '{id}' in category '{category}'")]
    UnknownAlgorithm { category: String, id: String },

    /// A race needs at least one element of input.
    #[error("invalid selection: data size must be at least 1")]
    EmptyWorkload,

    /// The requested size exceeds the configured ceiling.
    #[error("invalid selection: data size {requested} exceeds the limit of {limit}")]
    DataSizeTooLarge { requested: usize, limit: usize },

    /// The workload shape does not fit the family that was asked to run it.
    #[error("workload of kind '{found}' cannot be run by the '{category}' family")]
    WorkloadMismatch { category: String, found: &'static str },

    /// The algorithm panicked while running.
    #[error("algorithm '{id}' failed: {reason}")]
    ExecutionFailed { id: String, reason: String },
}

/// Errors raised while building an algorithm family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("algorithm id '{0}' is already registered in this family")]
    DuplicateId(&'static str),
}

/// Structural problems in a hand-built graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} references node {missing} which is not in the graph")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
}
