use crate::groups::NumAdditiveGroups;
use crate::segment_tree::SegmentTree;

/// Range sums over the signed weight sequence of a tour.
///
/// Between the first occurrences of an ancestor `a` and a descendant `b`, every
/// subtree that is entered is also left again, so `query(first(a), first(b))`
/// nets out to the weight of the path `a -> b`.
#[derive(Clone, Debug)]
pub struct PathWeightTree<T: num::Num + Clone> {
    tree: SegmentTree<NumAdditiveGroups<T>>,
}

impl<T: num::Num + Clone> PathWeightTree<T> {
    pub fn new(length: usize) -> Self {
        Self {
            tree: SegmentTree::new(NumAdditiveGroups::new(), length),
        }
    }

    /// `length` may exceed `weights.len()`; the remaining leaves stay zero.
    pub fn from_weights<Iter: IntoIterator<Item = T>>(length: usize, weights: Iter) -> Self {
        let mut pw = Self::new(length);
        pw.tree.build(weights);
        pw
    }

    /// Initial load of one step.
    ///
    /// O(log n)
    pub fn insert(&mut self, position: usize, value: T) {
        self.tree.update(position, value);
    }

    /// Replaces one step after the initial load.
    ///
    /// O(log n)
    pub fn update(&mut self, position: usize, value: T) {
        self.tree.update(position, value);
    }

    /// Sum over `[lo, hi)`. An empty or out of range interval is the empty path, `0`.
    ///
    /// O(log n)
    pub fn query(&self, lo: usize, hi: usize) -> T {
        self.tree.sum(lo, hi)
    }

    /// O(1)
    #[inline]
    pub fn get(&self, position: usize) -> T {
        self.tree.get(position).clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_paths_of_sample() {
        let pw = PathWeightTree::from_weights(7, vec![5i64, 2, -2, -5, 3, -3]);
        // root -> 4
        assert_eq!(pw.query(0, 2), 7);
        // root -> 3, crossing the closed subtree of 2
        assert_eq!(pw.query(0, 5), 3);
        // 2 -> 4
        assert_eq!(pw.query(1, 2), 2);
        // node against itself
        assert_eq!(pw.query(2, 2), 0);
        assert_eq!(pw.query(3, 100), 0);
    }

    #[test]
    fn update_replaces_value() {
        let mut pw = PathWeightTree::<i64>::new(4);
        for (i, w) in [1, 2, -2, -1].iter().enumerate() {
            pw.insert(i, *w);
        }
        assert_eq!(pw.query(0, 2), 3);
        pw.update(1, 10);
        pw.update(2, -10);
        assert_eq!(pw.get(1), 10);
        assert_eq!(pw.query(0, 2), 11);
        assert_eq!(pw.query(0, 4), 0);
    }
}
