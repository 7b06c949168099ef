use thiserror::Error;

use crate::connectivity::element::ElementKind;

/// Why a connectivity search produced no removal set.
///
/// `E` is the error type of the property being searched against; property
/// errors are passed through untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<E> {
    /// Even removing every element leaves the property intact.
    #[error("no {kind} removal set breaks the property, not even removing all {elements}")]
    Unsatisfiable { kind: ElementKind, elements: usize },
    #[error("property evaluation failed")]
    Property(#[source] E),
}

impl<E> SearchError<E> {
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SearchError::Unsatisfiable { .. })
    }
}
