use std::fmt;

use petgraph::prelude::Bfs;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::{VisitMap, Visitable};

/// The kind of graph element a search removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Edge,
    Vertex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Edge => f.write_str("edge"),
            ElementKind::Vertex => f.write_str("vertex"),
        }
    }
}

/// Where the property has to hold for the graph to count as unbroken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The residual graph as a whole.
    WholeGraph,
    /// Every connected component of the residual graph.
    PerComponent,
}

/// A graph element that can be deleted from a copy of the graph it came from.
///
/// Identities are `petgraph` stable-graph indices, so an element taken from the
/// original graph still names the same element in any clone of it.
pub trait Removable: Copy + Eq + fmt::Debug {
    const KIND: ElementKind;

    /// All elements of this kind, in index order.
    fn elements<N, E>(graph: &StableUnGraph<N, E>) -> Vec<Self>;

    fn remove_from<N, E>(graph: &mut StableUnGraph<N, E>, removal: &[Self]);
}

impl Removable for EdgeIndex {
    const KIND: ElementKind = ElementKind::Edge;

    fn elements<N, E>(graph: &StableUnGraph<N, E>) -> Vec<Self> {
        graph.edge_indices().collect()
    }

    fn remove_from<N, E>(graph: &mut StableUnGraph<N, E>, removal: &[Self]) {
        for &edge in removal {
            let _ = graph.remove_edge(edge);
        }
    }
}

impl Removable for NodeIndex {
    const KIND: ElementKind = ElementKind::Vertex;

    fn elements<N, E>(graph: &StableUnGraph<N, E>) -> Vec<Self> {
        graph.node_indices().collect()
    }

    // removing a vertex also drops its incident edges
    fn remove_from<N, E>(graph: &mut StableUnGraph<N, E>, removal: &[Self]) {
        for &vertex in removal {
            let _ = graph.remove_node(vertex);
        }
    }
}

/// Copy `graph` and delete `removal` from the copy.
pub fn residual<T, N, E>(graph: &StableUnGraph<N, E>, removal: &[T]) -> StableUnGraph<N, E>
where
    T: Removable,
    N: Clone,
    E: Clone,
{
    let mut residual = graph.clone();
    T::remove_from(&mut residual, removal);
    residual
}

/// Split `graph` into its connected components.
///
/// Components are ordered by their lowest vertex index and keep the indices
/// they had in `graph`.
pub fn components<N, E>(graph: &StableUnGraph<N, E>) -> Vec<StableUnGraph<N, E>>
where
    N: Clone,
    E: Clone,
{
    let mut assigned = graph.visit_map();
    let mut components = vec![];

    for start in graph.node_indices() {
        if assigned.is_visited(&start) {
            continue;
        }

        // collect everything reachable from the first unassigned vertex
        let mut members = graph.visit_map();
        let mut bfs = Bfs::new(graph, start);
        while let Some(vertex) = bfs.next(graph) {
            assigned.visit(vertex);
            members.visit(vertex);
        }

        let mut component = graph.clone();
        component.retain_nodes(|_, vertex| members.is_visited(&vertex));
        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

    use crate::connectivity::element::{components, residual, Removable};

    #[test]
    fn vertex_removal_drops_incident_edges() {
        let graph = StableUnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let removed = residual(&graph, &[NodeIndex::new(1)]);

        assert_eq!(3, removed.node_count());
        assert_eq!(2, removed.edge_count());
        // the original is untouched
        assert_eq!(4, graph.edge_count());
    }

    #[test]
    fn identities_survive_removal() {
        let graph = StableUnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3)]);
        let removed = residual(&graph, &[EdgeIndex::new(1)]);

        assert_eq!(vec![EdgeIndex::new(0), EdgeIndex::new(2)], EdgeIndex::elements(&removed));
        assert_eq!(
            Some((NodeIndex::new(2), NodeIndex::new(3))),
            removed.edge_endpoints(EdgeIndex::new(2))
        );
    }

    #[test]
    fn components_are_ordered_by_lowest_vertex() {
        let mut graph = StableUnGraph::<(), ()>::from_edges(&[(0, 3), (1, 2), (3, 4)]);
        let _ = graph.add_node(());

        let parts = components(&graph);
        let vertex_sets: Vec<Vec<NodeIndex>> = parts
            .iter()
            .map(|part| part.node_indices().collect())
            .collect();
        let expected = vec![
            vec![NodeIndex::new(0), NodeIndex::new(3), NodeIndex::new(4)],
            vec![NodeIndex::new(1), NodeIndex::new(2)],
            vec![NodeIndex::new(5)],
        ];
        assert_eq!(expected, vertex_sets);
        let edge_counts: Vec<usize> = parts.iter().map(|part| part.edge_count()).collect();
        assert_eq!(vec![2, 1, 0], edge_counts);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = StableUnGraph::<(), ()>::default();
        assert!(components(&graph).is_empty());
    }
}
