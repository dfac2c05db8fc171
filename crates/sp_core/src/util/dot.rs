//! Graphviz export, e.g. for <http://www.webgraphviz.com/>
use std::io::{self, Write};

use crate::graph::Graph;

/// Writes `g` as an undirected DOT graph.
///
/// ```text
/// graph {
/// 0 [label="0"];
/// 0 -- 1 [label="2"];
/// }
/// ```
pub fn write_dot<W: Write>(g: &Graph, w: &mut W) -> io::Result<()> {
    writeln!(w, "graph {{")?;
    for node in g.nodes() {
        writeln!(w, "{} [label=\"{}\"];", node, node)?;
    }
    for edge in g.edges() {
        writeln!(
            w,
            "{} -- {} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        )?;
    }
    writeln!(w, "}}")
}

pub fn to_dot_string(g: &Graph) -> String {
    let mut buf = Vec::new();
    write_dot(g, &mut buf).expect("writing to a Vec");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_graphs::diamond_graph;

    #[test]
    fn diamond_to_dot() {
        let g = diamond_graph();

        let expected = "graph {\n\
            0 [label=\"0\"];\n\
            1 [label=\"1\"];\n\
            2 [label=\"2\"];\n\
            3 [label=\"3\"];\n\
            0 -- 1 [label=\"2\"];\n\
            1 -- 2 [label=\"2\"];\n\
            0 -- 2 [label=\"5\"];\n\
            2 -- 3 [label=\"1\"];\n\
            }\n";

        assert_eq!(to_dot_string(&g), expected);
    }

    #[test]
    fn export_to_file() {
        let g = diamond_graph();
        let path = std::env::temp_dir().join(format!("sp_core_{}.dot", std::process::id()));

        g.export_dot(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, to_dot_string(&g));
    }

    #[test]
    fn empty_graph() {
        assert_eq!(to_dot_string(&Graph::new()), "graph {\n}\n");
    }
}
