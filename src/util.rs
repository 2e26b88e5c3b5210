pub use remainder::{remaining, Remaining};

mod remainder {
    /// The elements of a slice around one borrowed-out index.
    pub struct Remaining<'a, T> {
        left: &'a mut [T],
        right: &'a mut [T],
    }

    impl<T> Remaining<'_, T> {
        /// Get the value at position `i` of the underlying slice.
        /// Returns `None` if the index is out of bounds or is the index
        /// passed to [`remaining`].
        pub fn get(&self, i: usize) -> Option<&T> {
            if i < self.left.len() {
                self.left.get(i)
            } else {
                i.checked_sub(self.left.len() + 1)
                    .and_then(|j| self.right.get(j))
            }
        }

        pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
            if i < self.left.len() {
                self.left.get_mut(i)
            } else {
                i.checked_sub(self.left.len() + 1)
                    .and_then(|j| self.right.get_mut(j))
            }
        }
    }

    /// Borrow the value at index `i` while keeping the rest of the slice
    /// reachable through the returned [`Remaining`] view.
    pub fn remaining<T>(slice: &mut [T], i: usize) -> Option<(&mut T, Remaining<'_, T>)> {
        if i >= slice.len() {
            return None;
        }

        let (left, rest) = slice.split_at_mut(i);
        let (value, right) = rest.split_first_mut().expect("index checked to be in bounds");

        Some((value, Remaining { left, right }))
    }

}
