use std::marker::PhantomData;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use tracing::{debug, instrument, trace, warn};

use crate::connectivity::element::{components, residual, Removable, Scope};
use crate::connectivity::error::SearchError;
use crate::connectivity::memo::{CanonicalForm, CanonicalMemo};
use crate::connectivity::subsets::SubsetEnumerator;
use crate::properties::Property;

/// Elements whose removal breaks a property, in the order they were enumerated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalSet<T> {
    elements: Vec<T>,
}

impl<T> RemovalSet<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialEq> RemovalSet<T> {
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }
}

impl<'a, T> IntoIterator for &'a RemovalSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Removal sets taken from the enumerator.
    pub candidates: usize,
    /// Candidates skipped because an isomorphic residual graph was already tested.
    pub memo_hits: usize,
    /// Calls into the property, one per component for per-component searches.
    pub evaluations: usize,
}

/// The first removal set that broke the property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T> {
    pub removal_set: RemovalSet<T>,
    /// Verdict per component of the residual graph, for per-component searches.
    pub verdicts: Option<Vec<bool>>,
    pub stats: SearchStats,
}

impl<T> Outcome<T> {
    pub fn into_removal_set(self) -> RemovalSet<T> {
        self.removal_set
    }

    pub fn into_parts(self) -> (RemovalSet<T>, Vec<bool>) {
        (self.removal_set, self.verdicts.unwrap_or_default())
    }
}

/// Exhaustive minimum search over removal sets of one element kind.
///
/// Removal sets are tried smallest first, so for a property that can only be
/// lost (never regained) by removing more elements, the first set that breaks
/// it has minimum size. Residual graphs isomorphic to one already tested at the
/// same size are skipped unless memoisation is switched off.
#[derive(Clone, Copy, Debug)]
pub struct Search<T> {
    scope: Scope,
    memoize: bool,
    kind: PhantomData<fn() -> T>,
}

impl Search<EdgeIndex> {
    pub fn edges(scope: Scope) -> Self {
        Self::new(scope)
    }
}

impl Search<NodeIndex> {
    pub fn vertices(scope: Scope) -> Self {
        Self::new(scope)
    }
}

impl<T: Removable> Search<T> {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            memoize: true,
            kind: PhantomData,
        }
    }

    /// Toggle isomorphism deduplication. The result is the same either way.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(kind = %T::KIND, scope = ?self.scope, memoize = self.memoize),
    )]
    pub fn run<N, E, P>(
        &self,
        graph: &StableUnGraph<N, E>,
        property: &P,
    ) -> Result<Outcome<T>, SearchError<P::Error>>
    where
        N: Clone,
        E: Clone,
        P: Property<N, E>,
    {
        let elements = T::elements(graph);
        let element_count = elements.len();
        let mut memo = CanonicalMemo::new();
        let mut stats = SearchStats::default();
        let mut level = 0;

        for removal in SubsetEnumerator::new(elements) {
            if removal.len() > level {
                debug!(
                    level,
                    representatives = memo.level_len(level),
                    candidates = stats.candidates,
                    "removal level exhausted"
                );
                level = removal.len();
            }
            stats.candidates += 1;

            let residual = residual(graph, &removal);

            if self.memoize {
                let form = CanonicalForm::of(&residual);
                if memo.seen(level, &form) {
                    trace!(?removal, "isomorphic residual already tested");
                    stats.memo_hits += 1;
                    continue;
                }
                memo.record(level, form);
            }

            let verdicts = match self.scope {
                Scope::WholeGraph => {
                    stats.evaluations += 1;
                    if property.holds(&residual).map_err(SearchError::Property)? {
                        continue;
                    }
                    None
                }
                Scope::PerComponent => {
                    let verdicts = components(&residual)
                        .iter()
                        .map(|component| {
                            stats.evaluations += 1;
                            property.holds(component)
                        })
                        .collect::<Result<Vec<bool>, _>>()
                        .map_err(SearchError::Property)?;
                    if verdicts.iter().all(|&holds| holds) {
                        continue;
                    }
                    Some(verdicts)
                }
            };

            debug!(?removal, ?stats, "property broken");
            return Ok(Outcome {
                removal_set: RemovalSet::new(removal),
                verdicts,
                stats,
            });
        }

        warn!(elements = element_count, ?stats, "no removal set breaks the property");
        Err(SearchError::Unsatisfiable {
            kind: T::KIND,
            elements: element_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

    use crate::connectivity::element::{residual, ElementKind, Scope};
    use crate::connectivity::error::SearchError;
    use crate::connectivity::search::Search;
    use crate::generators::{complete, complete_bipartite, cycle, path};
    use crate::properties::{has_circumference_at_least, Connected, Fallible, MinCircumference};

    #[test]
    fn broken_input_returns_empty_set() {
        let graph = complete_bipartite(3, 8);
        let outcome = Search::edges(Scope::WholeGraph)
            .run(&graph, &MinCircumference::new(7))
            .unwrap();

        assert!(outcome.removal_set.is_empty());
        assert_eq!(None, outcome.verdicts);
        assert_eq!(1, outcome.stats.candidates);
        assert_eq!(1, outcome.stats.evaluations);
    }

    #[test]
    fn cycle_loses_connectivity_after_two_edges() {
        let graph = cycle(6);
        let outcome = Search::edges(Scope::WholeGraph)
            .run(&graph, &Connected)
            .unwrap();

        assert_eq!(2, outcome.removal_set.len());
        // every single edge of a cycle looks the same, so level 1 costs one evaluation
        assert_eq!(8, outcome.stats.candidates);
        assert_eq!(5, outcome.stats.memo_hits);
        assert_eq!(3, outcome.stats.evaluations);
    }

    #[test]
    fn vertex_search_returns_vertices() {
        let graph = path(5);
        let outcome = Search::vertices(Scope::WholeGraph)
            .run(&graph, &Connected)
            .unwrap();

        assert_eq!(vec![NodeIndex::new(1)], outcome.removal_set.into_vec());
    }

    #[test]
    fn complete_graph_vertex_connectivity_is_unsatisfiable() {
        let graph = complete(4);
        let error = Search::vertices(Scope::WholeGraph)
            .run(&graph, &Connected)
            .unwrap_err();

        assert_eq!(
            SearchError::Unsatisfiable {
                kind: ElementKind::Vertex,
                elements: 4
            },
            error
        );
    }

    #[test]
    fn per_component_reports_every_verdict() {
        let two_triangles =
            StableUnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let has_cycle = |g: &StableUnGraph<(), ()>| g.edge_count() >= g.node_count();
        let outcome = Search::edges(Scope::PerComponent)
            .run(&two_triangles, &has_cycle)
            .unwrap();

        assert_eq!(vec![EdgeIndex::new(0)], outcome.removal_set.into_vec());
        assert_eq!(Some(vec![false, true]), outcome.verdicts);
        assert_eq!(4, outcome.stats.evaluations);
    }

    #[test]
    fn property_errors_abort_the_search() {
        let graph = cycle(4);
        let failing = Fallible::new(|g: &StableUnGraph<(), ()>| {
            if g.edge_count() < 4 {
                Err("too few edges to judge")
            } else {
                Ok(true)
            }
        });
        let error = Search::edges(Scope::WholeGraph)
            .run(&graph, &failing)
            .unwrap_err();

        assert_eq!(SearchError::Property("too few edges to judge"), error);
    }

    #[test]
    fn memo_does_not_change_the_answer() {
        let graph = complete_bipartite(2, 4);
        let property = MinCircumference::new(4);

        let with_memo = Search::edges(Scope::PerComponent)
            .run(&graph, &property)
            .unwrap();
        let without_memo = Search::edges(Scope::PerComponent)
            .memoize(false)
            .run(&graph, &property)
            .unwrap();

        assert_eq!(with_memo.removal_set, without_memo.removal_set);
        assert_eq!(with_memo.verdicts, without_memo.verdicts);
        assert_eq!(0, without_memo.stats.memo_hits);
        assert!(with_memo.stats.evaluations < without_memo.stats.evaluations);
    }

    #[test]
    fn returned_set_breaks_the_property() {
        let graph = complete_bipartite(3, 3);
        let outcome = Search::edges(Scope::WholeGraph)
            .run(&graph, &MinCircumference::new(6))
            .unwrap();
        let removal: Vec<EdgeIndex> = outcome.removal_set.into_vec();

        assert!(has_circumference_at_least(&graph, 6));
        assert!(!has_circumference_at_least(&residual(&graph, &removal), 6));
    }

    #[test]
    fn always_true_property_cannot_be_broken() {
        let graph = cycle(3);
        let always = |_: &StableUnGraph<(), ()>| true;
        let error: SearchError<Infallible> = Search::edges(Scope::PerComponent)
            .run(&graph, &always)
            .unwrap_err();

        assert!(error.is_unsatisfiable());
        assert_eq!(
            "no edge removal set breaks the property, not even removing all 3",
            error.to_string()
        );
    }
}
