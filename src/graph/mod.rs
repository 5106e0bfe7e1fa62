//! # Weighted Directed Graphs
//!
//! The graph model shared by the step-trace algorithms, the pathfinding and
//! spanning-tree benchmark families, and the workload generator.
//!
//! Graphs are plain values. Algorithms borrow them immutably and never keep
//! a reference past their return, so a caller may clone and mutate a graph
//! freely without affecting results that were already produced.

pub mod generator;

pub use generator::{create_random_graph, create_random_graph_with};

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::GraphError;

/// Identifier of a node.
pub type NodeId = usize;

/// A graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    pub id: NodeId,
}

/// A directed, weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Nodes plus directed edges, both in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph with nodes `0..node_count` and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).map(|id| Node { id }).collect(),
            edges: Vec::new(),
        }
    }

    /// Create a graph with nodes `0..node_count` and the given edges.
    ///
    /// # Example
    /// ```
    /// use algo_race::graph::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edges[1], Edge::new(0, 2, 1));
    /// ```
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, i64)>,
    {
        let mut graph = Self::with_nodes(node_count);
        graph.edges = edges
            .into_iter()
            .map(|(source, target, weight)| Edge::new(source, target, weight))
            .collect();
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: i64) {
        self.edges.push(Edge::new(source, target, weight));
    }

    /// Outgoing edges of `node`, in edge order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.source == node)
    }

    /// Check that every edge endpoint is a known node.
    pub fn validate(&self) -> Result<(), GraphError> {
        let ids: BTreeSet<NodeId> = self.nodes.iter().map(|n| n.id).collect();
        for edge in &self.edges {
            for endpoint in [edge.source, edge.target] {
                if !ids.contains(&endpoint) {
                    return Err(GraphError::DanglingEdge {
                        from: edge.source,
                        to: edge.target,
                        missing: endpoint,
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that node ids are exactly `0..node_count` in order, which the
    /// array-indexed benchmark algorithms rely on.
    pub fn has_sequential_ids(&self) -> bool {
        self.nodes.iter().enumerate().all(|(i, n)| n.id == i)
    }
}

/// A tentative or final path length.
///
/// `Infinite` marks an unreachable node and orders after every finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn value(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Extend the path by an edge of `weight`. Unreachable stays unreachable.
    pub fn extend(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}
