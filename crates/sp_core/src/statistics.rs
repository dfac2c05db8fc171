use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use histogram::Histogram;

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled,
            self.edges_relaxed,
            self.duration.unwrap_or_default()
        )
    }
}

/// Histogram over the number of incident edges of every vertex
pub fn degree_histogram(g: &Graph) -> Histogram {
    let hist = Histogram::new(0, 10, 30).unwrap();
    for node in g.nodes() {
        hist.increment(g.degree(node) as u64, 1).unwrap();
    }
    hist
}

pub fn average_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    let sum: usize = g.nodes().map(|node| g.degree(node)).sum();
    sum as f64 / g.num_nodes() as f64
}
