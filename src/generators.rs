//! Small named graphs.
//!
//! Vertices are numbered from 0 and edges are added in lexicographic order of
//! their endpoints, so element indices are predictable.

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

/// Complete bipartite graph K(a, b): vertices `0..a` on one side, `a..a + b`
/// on the other.
pub fn complete_bipartite(a: usize, b: usize) -> StableUnGraph<(), ()> {
    let mut graph = with_vertices(a + b);
    for left in 0..a {
        for right in a..a + b {
            let _ = graph.add_edge(NodeIndex::new(left), NodeIndex::new(right), ());
        }
    }
    graph
}

pub fn complete(n: usize) -> StableUnGraph<(), ()> {
    let mut graph = with_vertices(n);
    for u in 0..n {
        for v in u + 1..n {
            let _ = graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
    }
    graph
}

/// Cycle through `n` vertices. Below 3 vertices this is a path.
pub fn cycle(n: usize) -> StableUnGraph<(), ()> {
    let mut graph = path(n);
    if n >= 3 {
        let _ = graph.add_edge(NodeIndex::new(0), NodeIndex::new(n - 1), ());
    }
    graph
}

/// Path through `n` vertices.
pub fn path(n: usize) -> StableUnGraph<(), ()> {
    let mut graph = with_vertices(n);
    for u in 1..n {
        let _ = graph.add_edge(NodeIndex::new(u - 1), NodeIndex::new(u), ());
    }
    graph
}

fn with_vertices(n: usize) -> StableUnGraph<(), ()> {
    let mut graph = StableUnGraph::with_capacity(n, 0);
    for _ in 0..n {
        let _ = graph.add_node(());
    }
    graph
}
