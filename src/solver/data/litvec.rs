use super::Lit;
use crate::util;

/// Wrapper over `Vec` which is indexed by [`Lit`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LitVec<T>(Vec<T>);

impl<T> LitVec<T> {
    pub fn new() -> Self {
        Self(Default::default())
    }

    /// Get the element stored for `l` together with a view that still allows
    /// indexing every other literal.
    pub fn remaining(&mut self, l: Lit) -> (&mut T, Remaining<'_, T>) {
        let (val, remaining) =
            util::remaining(&mut self.0, lit_to_idx(l)).expect("litvec is too small for lit");
        (val, Remaining(remaining))
    }
}

pub struct Remaining<'a, T>(util::Remaining<'a, T>);

impl<T> std::ops::Index<Lit> for Remaining<'_, T> {
    type Output = T;

    fn index(&self, index: Lit) -> &Self::Output {
        self.0
            .get(lit_to_idx(index))
            .expect("index out of bounds or already borrowed")
    }
}

impl<T> std::ops::IndexMut<Lit> for Remaining<'_, T> {
    fn index_mut(&mut self, index: Lit) -> &mut Self::Output {
        self.0
            .get_mut(lit_to_idx(index))
            .expect("index out of bounds or already borrowed")
    }
}

impl<T: Clone> LitVec<T> {
    /// Resize so that `l` is a valid index.
    pub fn expand(&mut self, l: Lit, val: T) {
        let len = lit_to_idx(l) + 1;

        if len > self.0.len() {
            self.0.resize(len, val)
        }
    }
}

impl<T> Default for LitVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Both polarities of a variable sit next to each other. There is no
// variable 0, so everything shifts down by one slot pair.
fn lit_to_idx(lit: Lit) -> usize {
    (lit.get() - 2) as usize
}

impl<T> std::ops::Index<Lit> for LitVec<T> {
    type Output = T;

    fn index(&self, index: Lit) -> &Self::Output {
        &self.0[lit_to_idx(index)]
    }
}

impl<T> std::ops::IndexMut<Lit> for LitVec<T> {
    fn index_mut(&mut self, index: Lit) -> &mut Self::Output {
        &mut self.0[lit_to_idx(index)]
    }
}
