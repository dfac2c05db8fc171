pub mod cli;
pub mod dot;
pub mod test_graphs;
