use std::convert::Infallible;

use petgraph::prelude::Bfs;
use petgraph::stable_graph::StableUnGraph;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeCount, Visitable};

use crate::properties::Property;

/// Holds when the graph has at most one connected component.
///
/// With this property the searches compute classical edge and vertex
/// connectivity. The graph without vertices counts as connected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Connected;

impl<N, E> Property<N, E> for Connected {
    type Error = Infallible;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error> {
        Ok(is_connected(graph))
    }
}

pub fn is_connected<G>(graph: G) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeCount + Visitable,
{
    let Some(start) = graph.node_identifiers().next() else {
        return true;
    };

    let mut reached = 0usize;
    let mut bfs = Bfs::new(graph, start);
    while bfs.next(graph).is_some() {
        reached += 1;
    }

    reached == graph.node_count()
}
