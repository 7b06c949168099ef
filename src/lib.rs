//! Conditional connectivity of small graphs.
//!
//! Finds a minimum set of edges or vertices whose removal makes a graph, or some
//! connected component of what is left, lose a structural property such as
//! "has a cycle of length at least `l`" or "is planar". With the property
//! "is connected" this is classical edge/vertex connectivity.
//!
//! The search is exhaustive and exponential in the number of removable
//! elements; it is meant for small graphs.
//!
//! ```
//! use p_connectivity::generators::complete_bipartite;
//! use p_connectivity::properties::MinCircumference;
//! use p_connectivity::component_p_edge_connectivity;
//!
//! let graph = complete_bipartite(3, 3);
//! let (removal_set, verdicts) =
//!     component_p_edge_connectivity(&graph, &MinCircumference::new(6)).unwrap();
//! assert_eq!(removal_set.len(), 2);
//! assert!(verdicts.contains(&false));
//! ```

pub mod connectivity;
pub mod generators;
pub mod properties;

pub use connectivity::{
    component_p_edge_connectivity, component_p_vertex_connectivity, p_edge_connectivity,
    p_vertex_connectivity, ElementKind, Outcome, RemovalSet, Removable, Scope, Search,
    SearchError, SearchStats,
};
pub use properties::Property;
