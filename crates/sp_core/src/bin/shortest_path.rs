use anyhow::bail;
use log::info;
use sp_core::{
    prelude::*,
    util::cli,
};

fn format_path(sp: &ShortestPath) -> String {
    sp.nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse()?;
    let g = Graph::from_csv(
        &cfg.edges_file,
        cfg.num_nodes,
        Graph::with_max_nodes(cfg.max_nodes),
    )?;

    if let Some(dot_file) = &cfg.dot_file {
        g.export_dot(dot_file)?;
        println!("Graph written to {:?}", dot_file);
    }

    let (src, dst) = (node_index(cfg.src), node_index(cfg.dst));

    if cfg.compare {
        let mut linear = Dijkstra::new(&g);
        match linear.search(src, dst)? {
            Some(sp) => println!("Linear scan shortest path vertices: {}", format_path(&sp)),
            None => println!("Linear scan: no path found"),
        }
    }

    let mut dijkstra = Dijkstra::with_params(&g, cfg.params);
    let Some(sp) = dijkstra.search(src, dst)? else {
        bail!("No valid path found from {} to {}", src, dst);
    };
    info!("{}", dijkstra.stats);

    println!("Shortest path vertices: {}", format_path(&sp));
    println!("Shortest path weight: {}", sp.weight);

    Ok(())
}
