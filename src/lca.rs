use crate::groups::{DepthMin, MinDepth};
use crate::segment_tree::SegmentTree;

/// Range minimum over tour depths. The shallowest step between the first
/// occurrences of two nodes is their lowest common ancestor.
#[derive(Clone, Debug)]
pub struct LcaTree {
    tree: SegmentTree<MinDepth>,
}

impl LcaTree {
    pub fn new(length: usize) -> Self {
        Self {
            tree: SegmentTree::new(MinDepth::new(), length),
        }
    }

    /// Builds over a whole tour in O(n).
    pub fn from_tour(tour: &[usize], depths: &[usize]) -> Self {
        let mut lca = Self::new(tour.len());
        lca.tree.build(
            tour.iter()
                .zip(depths)
                .map(|(&node, &depth)| DepthMin::new(depth, node)),
        );
        lca
    }

    /// Ignored when `position` is past the padded length.
    ///
    /// O(log n)
    pub fn insert(&mut self, position: usize, node: usize, depth: usize) {
        self.tree.update(position, DepthMin::new(depth, node));
    }

    /// Shallowest step in `[i, j]`, both ends inclusive, `i <= j`.
    ///
    /// O(log n)
    pub fn query_min(&self, i: usize, j: usize) -> DepthMin {
        self.tree.sum(i, j + 1)
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
    fn answers_sample_ancestors() {
        let lca = LcaTree::from_tour(&[1, 2, 4, 2, 1, 3, 1], &[0, 1, 2, 1, 0, 1, 0]);
        assert_eq!(lca.query_min(2, 5).node, 1);
        assert_eq!(lca.query_min(1, 2).node, 2);
        assert_eq!(lca.query_min(2, 2).node, 4);
        assert_eq!(lca.query_min(0, 6), DepthMin::new(0, 1));
    }

    #[test]
    fn insert_matches_bulk_build() {
        let tour = [1, 2, 3, 2, 4, 2, 1];
        let depths = [0, 1, 2, 1, 2, 1, 0];
        let built = LcaTree::from_tour(&tour, &depths);
        let mut inserted = LcaTree::new(tour.len());
        for (pos, (&node, &depth)) in tour.iter().zip(&depths).enumerate() {
            inserted.insert(pos, node, depth);
        }
        inserted.insert(64, 9, 0);

        for i in 0..tour.len() {
            for j in i..tour.len() {
                assert_eq!(built.query_min(i, j), inserted.query_min(i, j));
            }
        }
        assert_eq!(built.query_min(2, 4).node, 2);
    }
}
