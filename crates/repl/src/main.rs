//! Interactive console to build a graph and query shortest paths
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sp_core::{
    constants::DEFAULT_MAX_NODES,
    prelude::*,
    statistics::{average_degree, degree_histogram},
};

fn format_path(sp: &ShortestPath) -> String {
    sp.nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace the graph with `n` unconnected vertices
fn nodes(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = *args.get_one::<usize>("n").unwrap();

    let mut g = Graph::with_max_nodes(context.max_nodes);
    if let Err(e) = g.add_nodes(n) {
        return Ok(Some(format!("Error: {}", e)));
    }
    context.graph = g;

    Ok(Some(format!("Created {} vertices", n)))
}

fn add_edge(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let a = *args.get_one::<usize>("a").unwrap();
    let b = *args.get_one::<usize>("b").unwrap();
    let weight = *args.get_one::<i64>("weight").unwrap();

    match context.graph.add_edge(a, b, weight) {
        Ok(_) => Ok(Some(format!("Added edge {} -- {} ({})", a, b, weight))),
        Err(e) => Ok(Some(format!(
            "Please put in VALID start, end, and edge weight values: {}",
            e
        ))),
    }
}

fn load(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let file = args.get_one::<String>("file").unwrap();

    match Graph::from_csv(
        Path::new(file),
        None,
        Graph::with_max_nodes(context.max_nodes),
    ) {
        Ok(g) => {
            context.graph = g;
            Ok(Some(format!(
                "Graph has {} nodes and {} edges",
                context.graph.num_nodes(),
                context.graph.num_edges()
            )))
        }
        Err(e) => Ok(Some(format!("Error: {:#}", e))),
    }
}

fn export_dot(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let file = args
        .get_one::<String>("file")
        .map_or_else(|| PathBuf::from("Graph.dot"), PathBuf::from);

    match context.graph.export_dot(&file) {
        Ok(()) => Ok(Some(format!(
            "Graph generated! Paste {:?} into http://www.webgraphviz.com/ to view the graph",
            file
        ))),
        Err(e) => Ok(Some(format!("Error: {:#}", e))),
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut info = format!(
        "Graph has {} nodes and {} edges, average degree {:.2}",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_degree(&context.graph)
    );

    let hist = degree_histogram(&context.graph);
    for bucket in hist.into_iter().filter(|b| b.count() > 0) {
        info.push_str(&format!(
            "\n  degree [{}-{}]: {}",
            bucket.low(),
            bucket.high(),
            bucket.count()
        ));
    }

    Ok(Some(info))
}

fn run_search(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();

    let strategy = match args.get_one::<String>("strategy") {
        Some(s) => match s.parse::<SelectionStrategy>() {
            Ok(strategy) => strategy,
            Err(e) => return Ok(Some(format!("Error: {}", e))),
        },
        None => SelectionStrategy::default(),
    };

    let mut dijkstra = Dijkstra::with_params(&context.graph, SearchParams::new().strategy(strategy));

    match dijkstra.search(node_index(src), node_index(dst)) {
        Ok(Some(sp)) => Ok(Some(format!(
            "Shortest path vertices: {}\nShortest path weight: {}\nTook: {:?}",
            format_path(&sp),
            sp.weight,
            dijkstra.stats.duration
        ))),
        Ok(None) => Ok(Some("ERROR: No valid path found!".to_string())),
        Err(e) => Ok(Some(format!("Error: {}", e))),
    }
}

/// Compare the local greedy strategy against the linear scan on random queries
fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::SliceRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&100);

    let nodes: Vec<NodeIndex> = context.graph.nodes().collect();
    if nodes.len() < 2 {
        return Ok(Some("Graph needs at least two vertices".to_string()));
    }

    let mut rng = rand::thread_rng();
    let mut exact = Dijkstra::new(&context.graph);
    let mut greedy = Dijkstra::with_params(
        &context.graph,
        SearchParams::new().strategy(SelectionStrategy::LocalGreedy),
    );

    let (mut longer, mut missed, mut reachable) = (0, 0, 0);

    let pb = ProgressBar::new(n as u64);
    for _ in 0..n {
        pb.inc(1);
        let pair: Vec<NodeIndex> = nodes.choose_multiple(&mut rng, 2).copied().collect();
        let (src, dst) = (pair[0], pair[1]);

        let Ok(Some(expected)) = exact.search(src, dst) else {
            continue;
        };
        reachable += 1;

        match greedy.search(src, dst) {
            Ok(Some(sp)) if sp.weight > expected.weight => longer += 1,
            Ok(Some(_)) => {}
            _ => missed += 1,
        }
    }
    pb.finish_and_clear();

    Ok(Some(format!(
        "{} queries, {} reachable: local greedy was longer {} times and found no path {} times",
        n, reachable, longer, missed
    )))
}

struct Context {
    graph: Graph,
    max_nodes: usize,
}

impl Context {
    fn new(graph: Graph, max_nodes: usize) -> Self {
        Self { graph, max_nodes }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Graph::with_max_nodes(DEFAULT_MAX_NODES), DEFAULT_MAX_NODES)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut repl = Repl::new(Context::default())
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Build an undirected graph and search shortest paths")
        .with_banner("STARTING")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(
            Command::new("nodes")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Number of vertices"),
                )
                .about(format!(
                    "Create a new graph with n vertices (max size of {})",
                    DEFAULT_MAX_NODES
                )),
            nodes,
        )
        .with_command(
            Command::new("edge")
                .arg(
                    Arg::new("a")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("First endpoint"),
                )
                .arg(
                    Arg::new("b")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Second endpoint"),
                )
                .arg(
                    Arg::new("weight")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("Edge weight, greater than zero"),
                )
                .about("Connect two vertices, e.g. `edge 0 3 5`"),
            add_edge,
        )
        .with_command(
            Command::new("load")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .help("CSV edge list with header source,target,weight"),
                )
                .about("Replace the graph with the contents of an edge list"),
            load,
        )
        .with_command(
            Command::new("dot")
                .arg(Arg::new("file").required(false).help("Output file, Graph.dot by default"))
                .about("Write the graph as Graphviz DOT"),
            export_dot,
        )
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("path")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Index of start vertex"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("Index of end vertex"),
                )
                .arg(
                    Arg::new("strategy")
                        .required(false)
                        .help("linear, heap or local"),
                )
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_search,
        )
        .with_command(
            Command::new("bench")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random queries"),
                )
                .about("Compare local greedy selection with Dijkstra on `n` random queries"),
            measure,
        );

    repl.run()
}
