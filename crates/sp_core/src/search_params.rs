//! Parameters for the shortest path search
use std::{fmt, str::FromStr};

/// Rule used to pick the next vertex to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Settle the unvisited vertex with the smallest known distance, found by
    /// scanning the distance table. Ties go to the lowest vertex index.
    #[default]
    LinearScan,
    /// Same selection as `LinearScan`, backed by a binary heap
    BinaryHeap,
    /// Follow the cheapest edge from the current vertex to an unvisited
    /// neighbour. Not a correct shortest path algorithm: it can return a
    /// longer path or miss the target although a path exists.
    LocalGreedy,
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionStrategy::LinearScan => "linear",
            SelectionStrategy::BinaryHeap => "heap",
            SelectionStrategy::LocalGreedy => "local",
        };
        f.write_str(name)
    }
}

impl FromStr for SelectionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "scan" => Ok(SelectionStrategy::LinearScan),
            "heap" => Ok(SelectionStrategy::BinaryHeap),
            "local" | "greedy" => Ok(SelectionStrategy::LocalGreedy),
            other => anyhow::bail!(
                "Unknown strategy '{}', expected one of: linear, heap, local",
                other
            ),
        }
    }
}

/// Parameters for the shortest path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub(crate) strategy: SelectionStrategy,
}

impl SearchParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn selection_strategy(&self) -> SelectionStrategy {
        self.strategy
    }
}
