use std::collections::BTreeMap;

use petgraph::algo::is_isomorphic;
use petgraph::graph::UnGraph;
use petgraph::stable_graph::StableUnGraph;

/// A residual graph stripped down to its shape, ready for isomorphism tests.
#[derive(Clone, Debug)]
pub struct CanonicalForm {
    degrees: Vec<usize>,
    graph: UnGraph<(), ()>,
}

impl CanonicalForm {
    pub fn of<N, E>(graph: &StableUnGraph<N, E>) -> Self {
        // drop weights and close the index holes left by removals
        let shape: StableUnGraph<(), ()> = graph.map(|_, _| (), |_, _| ());
        let graph = UnGraph::from(shape);

        let mut degrees: Vec<usize> = graph
            .node_indices()
            .map(|vertex| graph.neighbors(vertex).count())
            .collect();
        degrees.sort_unstable();

        Self { degrees, graph }
    }

    pub fn is_isomorphic_to(&self, other: &CanonicalForm) -> bool {
        self.degrees == other.degrees && is_isomorphic(&self.graph, &other.graph)
    }
}

/// Isomorphism-class representatives of the residual graphs seen so far,
/// kept separately for each removal-set size.
///
/// Within one level no two stored forms are isomorphic, provided callers only
/// `record` forms they have checked with `seen`.
#[derive(Debug, Default)]
pub struct CanonicalMemo {
    levels: BTreeMap<usize, Vec<CanonicalForm>>,
}

impl CanonicalMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, level: usize, form: &CanonicalForm) -> bool {
        self.levels
            .get(&level)
            .is_some_and(|forms| forms.iter().any(|known| known.is_isomorphic_to(form)))
    }

    pub fn record(&mut self, level: usize, form: CanonicalForm) {
        self.levels.entry(level).or_default().push(form);
    }

    pub fn level_len(&self, level: usize) -> usize {
        self.levels.get(&level).map_or(0, Vec::len)
    }

    /// Number of representatives over all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.values().all(Vec::is_empty)
    }
}
