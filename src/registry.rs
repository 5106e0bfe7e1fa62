//! Algorithm registry for typed algorithm discovery and execution.
//!
//! Every problem family (sorting, pathfinding, spanning trees, dynamic
//! programming) is an [`AlgorithmFamily`] of interchangeable implementations
//! sharing one input and one output type. The [`Catalog`] bundles the four
//! families and runs any of them against a [`Workload`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::algorithms::{dp, mst, pathfinding, sorting};
use crate::error::{RaceError, RegistryError};
use crate::graph::{Distance, Edge};
use crate::utils::timer::to_millis;
use crate::workload::Workload;

/// A problem family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Pathfinding,
    Mst,
    Dp,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sorting,
        Category::Pathfinding,
        Category::Mst,
        Category::Dp,
    ];

    /// Stable identifier used in results and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Pathfinding => "pathfinding",
            Category::Mst => "mst",
            Category::Dp => "dp",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Sorting => "Sorting Algorithms",
            Category::Pathfinding => "Shortest Path Algorithms",
            Category::Mst => "Minimum Spanning Tree",
            Category::Dp => "Dynamic Programming",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Sorting => {
                "Compare different sorting techniques and their performance characteristics."
            }
            Category::Pathfinding => {
                "Analyze algorithms that find the shortest path between nodes in a graph."
            }
            Category::Mst => {
                "Compare algorithms that find the minimum spanning tree in a connected graph."
            }
            Category::Dp => {
                "Evaluate different approaches to solving problems using dynamic programming."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RaceError::UnknownCategory(s.to_string()))
    }
}

/// Catalog metadata of one algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Identifier, unique within its family (e.g. "bubbleSort")
    pub id: &'static str,
    /// Display name (e.g. "Bubble Sort")
    pub name: &'static str,
    /// Time complexity label
    pub complexity: &'static str,
    /// Space complexity label
    pub space_complexity: &'static str,
}

/// Result of one timed execution.
#[derive(Clone, Debug, PartialEq)]
pub struct Execution<O> {
    pub result: O,
    /// Wall-clock time of the algorithm body in milliseconds.
    pub time_ms: f64,
}

/// Trait that every benchmarked algorithm implements.
///
/// `run` must be a pure function of its input: no shared mutable state, so
/// any two algorithms can be executed back to back (or on different threads)
/// against the same borrowed input.
pub trait Algorithm<I: ?Sized, O>: Send + Sync {
    fn descriptor(&self) -> &Descriptor;

    /// Compute the result.
    fn run(&self, input: &I) -> O;

    /// Compute the result and time it with the monotonic clock.
    fn execute(&self, input: &I) -> Execution<O> {
        let (elapsed, result) = crate::measure!(self.run(input));
        Execution {
            result,
            time_ms: to_millis(elapsed),
        }
    }

    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    fn name(&self) -> &'static str {
        self.descriptor().name
    }
}

/// Metadata plus a plain function implementing it.
pub struct AlgorithmInfo<F> {
    pub descriptor: Descriptor,
    pub function: F,
}

impl<I: ?Sized, O> Algorithm<I, O> for AlgorithmInfo<fn(&I) -> O> {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, input: &I) -> O {
        (self.function)(input)
    }
}

/// An ordered catalog of interchangeable algorithms for one problem.
pub struct AlgorithmFamily<I: ?Sized + 'static, O: 'static> {
    category: Category,
    algorithms: Vec<Box<dyn Algorithm<I, O>>>,
}

impl<I: ?Sized + 'static, O: 'static> AlgorithmFamily<I, O> {
    /// Create a new empty family
    pub fn new(category: Category) -> Self {
        Self {
            category,
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm. Ids must be unique within the family.
    pub fn register<A: Algorithm<I, O> + 'static>(&mut self, algo: A) -> Result<(), RegistryError> {
        let id = algo.id();
        if self.find(id).is_some() {
            return Err(RegistryError::DuplicateId(id));
        }
        self.algorithms.push(Box::new(algo));
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// All algorithms in registration order
    pub fn all(&self) -> &[Box<dyn Algorithm<I, O>>] {
        &self.algorithms
    }

    /// Find algorithm by id
    pub fn find(&self, id: &str) -> Option<&dyn Algorithm<I, O>> {
        self.algorithms
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.as_ref())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.id()).collect()
    }

    pub fn descriptors(&self) -> Vec<Descriptor> {
        self.algorithms
            .iter()
            .map(|a| a.descriptor().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

/// Build a family from plain-function variants. A variant whose id is
/// already taken is skipped with a warning.
pub(crate) fn family_from<I: ?Sized + 'static, O: 'static>(
    category: Category,
    variants: Vec<AlgorithmInfo<fn(&I) -> O>>,
) -> AlgorithmFamily<I, O> {
    let mut family = AlgorithmFamily::new(category);
    for variant in variants {
        if let Err(err) = family.register(variant) {
            tracing::warn!(%category, %err, "skipping algorithm variant");
        }
    }
    family
}

/// Result of running any catalog algorithm.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Outcome {
    Sorted(Vec<i64>),
    Distances(Vec<Distance>),
    SpanningTree(Vec<Edge>),
    Value(f64),
}

/// The four algorithm families.
pub struct Catalog {
    pub sorting: sorting::SortingFamily,
    pub pathfinding: pathfinding::PathfindingFamily,
    pub mst: mst::MstFamily,
    pub dp: dp::DpFamily,
}

impl Catalog {
    /// Descriptors of a category, in catalog order.
    pub fn describe(&self, category: Category) -> Vec<Descriptor> {
        match category {
            Category::Sorting => self.sorting.descriptors(),
            Category::Pathfinding => self.pathfinding.descriptors(),
            Category::Mst => self.mst.descriptors(),
            Category::Dp => self.dp.descriptors(),
        }
    }

    pub fn descriptor(&self, category: Category, id: &str) -> Option<Descriptor> {
        match category {
            Category::Sorting => self.sorting.find(id).map(|a| a.descriptor().clone()),
            Category::Pathfinding => self.pathfinding.find(id).map(|a| a.descriptor().clone()),
            Category::Mst => self.mst.find(id).map(|a| a.descriptor().clone()),
            Category::Dp => self.dp.find(id).map(|a| a.descriptor().clone()),
        }
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.descriptor(category, id).is_some()
    }

    /// Execute algorithm `id` of `category` against `workload`.
    pub fn run(
        &self,
        category: Category,
        id: &str,
        workload: &Workload,
    ) -> Result<Execution<Outcome>, RaceError> {
        let unknown = || RaceError::UnknownAlgorithm {
            category: category.to_string(),
            id: id.to_string(),
        };
        let mismatch = || RaceError::WorkloadMismatch {
            category: category.to_string(),
            found: workload.kind(),
        };

        let execution = match (category, workload) {
            (Category::Sorting, Workload::Sorting(data) | Workload::Generic(data)) => {
                let algo = self.sorting.find(id).ok_or_else(unknown)?;
                map_execution(algo.execute(data), Outcome::Sorted)
            }
            (Category::Pathfinding, Workload::Graph(graph)) => {
                let algo = self.pathfinding.find(id).ok_or_else(unknown)?;
                map_execution(algo.execute(graph), Outcome::Distances)
            }
            (Category::Mst, Workload::Graph(graph)) => {
                let algo = self.mst.find(id).ok_or_else(unknown)?;
                map_execution(algo.execute(graph), Outcome::SpanningTree)
            }
            (Category::Dp, Workload::Dp(data)) => {
                let algo = self.dp.find(id).ok_or_else(unknown)?;
                map_execution(algo.execute(data), Outcome::Value)
            }
            _ => return Err(mismatch()),
        };
        Ok(execution)
    }

    /// Cross-check the family of `category` on reference inputs.
    pub fn verify_category(&self, category: Category) -> Result<(), String> {
        match category {
            Category::Sorting => sorting::verify(&self.sorting),
            Category::Pathfinding => pathfinding::verify(&self.pathfinding),
            Category::Mst => mst::verify(&self.mst),
            Category::Dp => dp::verify(&self.dp),
        }
    }

    /// Cross-check every family on reference inputs.
    pub fn verify(&self) -> Result<(), String> {
        Category::ALL
            .into_iter()
            .try_for_each(|category| self.verify_category(category))
    }
}

fn map_execution<O>(execution: Execution<O>, wrap: fn(O) -> Outcome) -> Execution<Outcome> {
    Execution {
        result: wrap(execution.result),
        time_ms: execution.time_ms,
    }
}

/// Build the default catalog with all algorithms
pub fn build_catalog() -> Catalog {
    Catalog {
        sorting: sorting::family(),
        pathfinding: pathfinding::family(),
        mst: mst::family(),
        dp: dp::family(),
    }
}
