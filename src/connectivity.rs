mod element;
mod error;
mod memo;
mod search;
mod subsets;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

use crate::properties::Property;

pub use element::{components, residual, ElementKind, Removable, Scope};
pub use error::SearchError;
pub use memo::{CanonicalForm, CanonicalMemo};
pub use search::{Outcome, RemovalSet, Search, SearchStats};
pub use subsets::SubsetEnumerator;

/// Finds a minimum set of edges whose removal leaves a graph without `property`.
pub fn p_edge_connectivity<N, E, P>(
    graph: &StableUnGraph<N, E>,
    property: &P,
) -> Result<RemovalSet<EdgeIndex>, SearchError<P::Error>>
where
    N: Clone,
    E: Clone,
    P: Property<N, E>,
{
    Search::edges(Scope::WholeGraph)
        .run(graph, property)
        .map(Outcome::into_removal_set)
}

/// Finds a minimum set of vertices whose removal leaves a graph without `property`.
pub fn p_vertex_connectivity<N, E, P>(
    graph: &StableUnGraph<N, E>,
    property: &P,
) -> Result<RemovalSet<NodeIndex>, SearchError<P::Error>>
where
    N: Clone,
    E: Clone,
    P: Property<N, E>,
{
    Search::vertices(Scope::WholeGraph)
        .run(graph, property)
        .map(Outcome::into_removal_set)
}

/// Finds a minimum set of edges whose removal leaves some component without
/// `property`, together with the verdict for every component at that point.
pub fn component_p_edge_connectivity<N, E, P>(
    graph: &StableUnGraph<N, E>,
    property: &P,
) -> Result<(RemovalSet<EdgeIndex>, Vec<bool>), SearchError<P::Error>>
where
    N: Clone,
    E: Clone,
    P: Property<N, E>,
{
    Search::edges(Scope::PerComponent)
        .run(graph, property)
        .map(Outcome::into_parts)
}

/// Finds a minimum set of vertices whose removal leaves some component without
/// `property`, together with the verdict for every component at that point.
pub fn component_p_vertex_connectivity<N, E, P>(
    graph: &StableUnGraph<N, E>,
    property: &P,
) -> Result<(RemovalSet<NodeIndex>, Vec<bool>), SearchError<P::Error>>
where
    N: Clone,
    E: Clone,
    P: Property<N, E>,
{
    Search::vertices(Scope::PerComponent)
        .run(graph, property)
        .map(Outcome::into_parts)
}
