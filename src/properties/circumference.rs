use std::convert::Infallible;

use petgraph::stable_graph::StableUnGraph;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeIndexable};

use crate::properties::Property;

/// Holds when the graph has a simple cycle through at least `length` vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinCircumference {
    length: usize,
}

impl MinCircumference {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl<N, E> Property<N, E> for MinCircumference {
    type Error = Infallible;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error> {
        Ok(has_circumference_at_least(graph, self.length))
    }
}

/// Length of the longest simple cycle, 0 if the graph is acyclic.
pub fn circumference<G>(graph: G) -> usize
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    longest_cycle(graph, usize::MAX)
}

/// Whether the longest simple cycle has at least `length` vertices.
///
/// Stops at the first cycle that is long enough.
pub fn has_circumference_at_least<G>(graph: G, length: usize) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    length == 0 || longest_cycle(graph, length) >= length
}

struct CycleSearch<G> {
    graph: G,
    on_path: Vec<bool>,
    longest: usize,
    enough: usize,
}

impl<G> CycleSearch<G>
where
    G: IntoNeighbors + NodeIndexable,
{
    /// Extend a simple path from `start` that currently ends in `vertex` and
    /// holds `length` vertices. Returns true once a cycle of `enough` vertices
    /// has been found.
    fn extend(&mut self, start: G::NodeId, vertex: G::NodeId, length: usize) -> bool {
        let graph = self.graph;
        let start_index = graph.to_index(start);
        for next in graph.neighbors(vertex) {
            if next == start {
                // two vertices cannot close a simple cycle
                if length >= 3 {
                    self.longest = self.longest.max(length);
                    if self.longest >= self.enough {
                        return true;
                    }
                }
                continue;
            }

            // every cycle is found from its lowest vertex only
            let next_index = graph.to_index(next);
            if next_index < start_index || self.on_path[next_index] {
                continue;
            }

            self.on_path[next_index] = true;
            if self.extend(start, next, length + 1) {
                return true;
            }
            self.on_path[next_index] = false;
        }

        false
    }
}

fn longest_cycle<G>(graph: G, enough: usize) -> usize
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    let mut search = CycleSearch {
        graph,
        on_path: vec![false; graph.node_bound()],
        longest: 0,
        enough,
    };

    for start in graph.node_identifiers() {
        let start_index = graph.to_index(start);
        search.on_path[start_index] = true;
        let done = search.extend(start, start, 1);
        search.on_path[start_index] = false;
        if done {
            break;
        }
    }

    search.longest
}
