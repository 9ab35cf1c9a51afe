//! Per-node lookups into the tour sequences, indexed by node id.

/// Earliest position of each node in the tour.
#[derive(Clone, Debug)]
pub struct FirstOccurrence {
    first: Vec<usize>,
}

impl FirstOccurrence {
    /// `nodes` is the largest node id; every id `1..=nodes` must occur in `tour`.
    pub fn build(tour: &[usize], nodes: usize) -> Self {
        let mut first = vec![usize::MAX; nodes + 1];
        for (pos, &node) in tour.iter().enumerate().rev() {
            first[node] = pos;
        }
        Self { first }
    }

    /// O(1)
    #[inline]
    pub fn get(&self, node: usize) -> usize {
        self.first[node]
    }
}

/// The two `order` positions of each node: where it is entered and where it is left.
///
/// Both are offsets into the signed weight sequence after subtracting one.
#[derive(Clone, Debug)]
pub struct EdgePositions {
    positions: Vec<(usize, usize)>,
}

impl EdgePositions {
    pub fn build(order: &[usize], nodes: usize) -> Self {
        let mut positions = vec![(usize::MAX, usize::MAX); nodes + 1];
        for (pos, &node) in order.iter().enumerate() {
            let slot = &mut positions[node];
            if slot.0 == usize::MAX {
                slot.0 = pos;
            } else {
                slot.1 = pos;
            }
        }
        Self { positions }
    }

    /// `(down, up)`
    ///
    /// O(1)
    #[inline]
    pub fn get(&self, node: usize) -> (usize, usize) {
        self.positions[node]
    }
}
