mod circumference;
mod connected;
mod planarity;

use std::convert::Infallible;
use std::marker::PhantomData;

use petgraph::stable_graph::StableUnGraph;

pub use circumference::{circumference, has_circumference_at_least, MinCircumference};
pub use connected::{is_connected, Connected};
pub use planarity::{is_planar, Planar};

/// A structural property a graph either has or lacks.
///
/// Evaluation must be deterministic and give the same answer for isomorphic
/// graphs. A search only returns a minimum removal set when removing elements
/// can never restore a property once it is lost.
pub trait Property<N, E> {
    type Error;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error>;
}

/// Plain predicates are properties that cannot fail.
impl<N, E, F> Property<N, E> for F
where
    F: Fn(&StableUnGraph<N, E>) -> bool,
{
    type Error = Infallible;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error> {
        Ok(self(graph))
    }
}

/// Adapts a predicate that can fail into a [`Property`]. Its errors abort the
/// search unchanged.
pub struct Fallible<F, Err> {
    predicate: F,
    error: PhantomData<fn() -> Err>,
}

impl<F, Err> Fallible<F, Err> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            error: PhantomData,
        }
    }
}

impl<N, E, F, Err> Property<N, E> for Fallible<F, Err>
where
    F: Fn(&StableUnGraph<N, E>) -> Result<bool, Err>,
{
    type Error = Err;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error> {
        (self.predicate)(graph)
    }
}
