use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::{
    constants::DEFAULT_MAX_NODES,
    search_params::{SearchParams, SelectionStrategy},
};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the edge list (.csv with header source,target,weight)
    edges_file: String,

    /// Index of the start vertex
    #[arg(short, long)]
    src: usize,

    /// Index of the end vertex
    #[arg(short, long)]
    dst: usize,

    /// Number of vertices. Inferred from the edge list if missing
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Largest number of vertices the graph may hold
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: usize,

    /// Set the selection strategy. Possible values are "linear", "heap" and "local"
    #[arg(long, value_name = "strategy")]
    strat: Option<String>,

    /// Write the graph as Graphviz DOT to this file
    #[arg(long, value_name = "file")]
    dot: Option<String>,

    /// Also run the linear scan search and print both results
    #[arg(short, long)]
    compare: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub edges_file: PathBuf,
    pub src: usize,
    pub dst: usize,
    pub num_nodes: Option<usize>,
    pub max_nodes: usize,
    pub params: SearchParams,
    pub dot_file: Option<PathBuf>,
    pub compare: bool,
}

/// Parses the process arguments, exiting with a usage message on error
pub fn parse() -> anyhow::Result<Cfg> {
    to_cfg(Cli::parse())
}

pub fn parse_from<I, T>(args: I) -> anyhow::Result<Cfg>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    to_cfg(Cli::try_parse_from(args)?)
}

fn to_cfg(cli: Cli) -> anyhow::Result<Cfg> {
    let strategy = match cli.strat.as_deref() {
        Some(s) => s.parse::<SelectionStrategy>()?,
        None => SelectionStrategy::default(),
    };

    Ok(Cfg {
        edges_file: PathBuf::from(cli.edges_file),
        src: cli.src,
        dst: cli.dst,
        num_nodes: cli.nodes,
        max_nodes: cli.max_nodes,
        params: SearchParams::new().strategy(strategy),
        dot_file: cli.dot.map(PathBuf::from),
        compare: cli.compare,
    })
}
