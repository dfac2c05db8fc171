use crate::{edge, graph::Graph};

/// The `{0, 1, 2, 3}` example graph
///
/// ```text
/// 0 --2-- 1
///  \      |
///   5     2
///    \    |
///     +-- 2 --1-- 3
/// ```
pub fn diamond_graph() -> Graph {
    let mut g = Graph::with_nodes(4).unwrap();

    edge!(g, 0, 1, 2);
    edge!(g, 1, 2, 2);
    edge!(g, 0, 2, 5);
    edge!(g, 2, 3, 1);

    g
}

/// 0 -- 1 -- 2 and 3 -- 4 -- 5 without a connection
pub fn two_components() -> Graph {
    let mut g = Graph::with_nodes(6).unwrap();

    edge!(g, 0, 1, 1);
    edge!(g, 1, 2, 1);
    edge!(g, 3, 4, 3);
    edge!(g, 4, 5, 1);

    g
}

/// Cheapest first hop from 0 leads to the expensive route to 3
///
/// ```text
/// 0 --1-- 1 --10-- 3
///  \              /
///   2 ---- 2 ---2
/// ```
pub fn greedy_trap_graph() -> Graph {
    let mut g = Graph::with_nodes(4).unwrap();

    edge!(g, 0, 1, 1);
    edge!(g, 1, 3, 10);
    edge!(g, 0, 2, 2);
    edge!(g, 2, 3, 2);

    g
}

/// Cheapest first hop from 0 leads into the leaf 1
pub fn dead_end_graph() -> Graph {
    let mut g = Graph::with_nodes(4).unwrap();

    edge!(g, 0, 1, 1);
    edge!(g, 0, 2, 5);
    edge!(g, 2, 3, 1);

    g
}

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::with_nodes(11).unwrap();

    let (a, b, c, d, e, f, g, h, i, j, k) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

    edge!(graph, a, b, 3); // A <=> B
    edge!(graph, a, c, 5); // A <=> C
    edge!(graph, a, k, 3); // A <=> K

    edge!(graph, b, d, 5); // B <=> D
    edge!(graph, b, c, 3); // B <=> C

    edge!(graph, c, d, 2); // C <=> D
    edge!(graph, c, j, 2); // C <=> J

    edge!(graph, d, j, 4); // D <=> J
    edge!(graph, d, e, 7); // D <=> E

    edge!(graph, e, j, 3); // E <=> J
    edge!(graph, e, f, 6); // E <=> F

    edge!(graph, f, h, 2); // F <=> H
    edge!(graph, f, g, 4); // F <=> G

    edge!(graph, g, h, 3); // G <=> H
    edge!(graph, g, i, 5); // G <=> I

    edge!(graph, h, i, 3); // H <=> I
    edge!(graph, h, j, 2); // H <=> J

    edge!(graph, i, j, 4); // I <=> J
    edge!(graph, i, k, 6); // I <=> K

    edge!(graph, j, k, 3); // J <=> K

    graph
}

/// `width` x `height` grid, vertex `y * width + x`. Horizontal edges weigh
/// `1 + (x + y) % 3`, vertical edges `1 + (x * y) % 4`.
pub fn grid_graph(width: usize, height: usize) -> Graph {
    let mut g = Graph::with_nodes(width * height).unwrap();

    for y in 0..height {
        for x in 0..width {
            let v = y * width + x;
            if x + 1 < width {
                edge!(g, v, v + 1, 1 + ((x + y) % 3) as i64);
            }
            if y + 1 < height {
                edge!(g, v, v + width, 1 + ((x * y) % 4) as i64);
            }
        }
    }

    g
}
