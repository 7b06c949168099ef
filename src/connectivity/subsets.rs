use std::vec::IntoIter;

use itertools::structs::Powerset;
use itertools::Itertools;

/// Lazily enumerates every subset of a fixed element ordering.
///
/// Subsets come out grouped by size, smallest first, and within one size in
/// combination order of the element positions. The sequence is finite and can
/// be restarted from the beginning.
#[derive(Clone)]
pub struct SubsetEnumerator<T: Clone> {
    elements: Vec<T>,
    subsets: Powerset<IntoIter<T>>,
}

impl<T: Clone> SubsetEnumerator<T> {
    pub fn new(elements: Vec<T>) -> Self {
        let subsets = elements.clone().into_iter().powerset();
        Self { elements, subsets }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Total number of subsets, `None` if 2^n does not fit in a `usize`.
    pub fn subset_count(&self) -> Option<usize> {
        u32::try_from(self.elements.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }

    /// Rewind to the empty subset.
    pub fn restart(&mut self) {
        self.subsets = self.elements.clone().into_iter().powerset();
    }
}

impl<T: Clone> Iterator for SubsetEnumerator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.subsets.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.subsets.size_hint()
    }
}
