use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::euler::EulerTour;
use crate::index::{EdgePositions, FirstOccurrence};
use crate::lca::LcaTree;
use crate::path_weight::PathWeightTree;
use crate::tree::Tree;

/// Answers path distances and edge weight updates on a fixed tree shape.
///
/// Preprocessing is O(n log n) at most, each operation O(log n).
#[derive(Clone, Debug)]
pub struct QueryEngine {
    nodes: usize,
    root: usize,
    tour: EulerTour,
    first: FirstOccurrence,
    edges: EdgePositions,
    lca: LcaTree,
    weights: PathWeightTree<i64>,
}

impl QueryEngine {
    pub fn new(tree: &Tree) -> Result<Self> {
        let tour = EulerTour::build(tree)?;
        let nodes = tree.len();

        let first = FirstOccurrence::build(tour.tour(), nodes);
        let edges = EdgePositions::build(tour.order(), nodes);
        let lca = LcaTree::from_tour(tour.tour(), tour.depths());
        let weights = PathWeightTree::from_weights(tour.len(), tour.weights().iter().cloned());

        debug!(
            nodes,
            lca_leaves = lca.len(),
            weight_leaves = weights.len(),
            "query engine ready"
        );
        Ok(Self {
            nodes,
            root: tree.root(),
            tour,
            first,
            edges,
            lca,
            weights,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes
    }

    #[inline]
    pub fn tour(&self) -> &EulerTour {
        &self.tour
    }

    fn check(&self, node: usize) -> Result<usize> {
        if (1..=self.nodes).contains(&node) {
            Ok(node)
        } else {
            Err(Error::NodeOutOfRange {
                node,
                len: self.nodes,
            })
        }
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn lca(&self, u: usize, v: usize) -> Result<usize> {
        let pu = self.first.get(self.check(u)?);
        let pv = self.first.get(self.check(v)?);
        Ok(self.lca.query_min(pu.min(pv), pu.max(pv)).node)
    }

    /// Weight of the path between the first occurrences `a` and `b`, one of
    /// which belongs to an ancestor of the other.
    fn half_path(&self, a: usize, b: usize) -> i64 {
        self.weights.query(a.min(b), a.max(b))
    }

    /// Sum of edge weights on the path between `u` and `v`.
    pub fn distance(&self, u: usize, v: usize) -> Result<i64> {
        let pu = self.first.get(self.check(u)?);
        let pv = self.first.get(self.check(v)?);

        let lca = self.lca.query_min(pu.min(pv), pu.max(pv)).node;
        let pl = self.first.get(lca);

        let distance = self.half_path(pl, pu) + self.half_path(pl, pv);
        trace!(u, v, lca, distance, "distance");
        Ok(distance)
    }

    /// Sets the weight of the edge between `node` and its parent.
    pub fn update(&mut self, node: usize, weight: i64) -> Result<()> {
        let (down, up) = self.edge(node)?;
        self.weights.update(down - 1, weight);
        self.weights.update(up - 1, -weight);
        trace!(node, weight, "update");
        Ok(())
    }

    /// Current weight of the edge between `node` and its parent.
    pub fn edge_weight(&self, node: usize) -> Result<i64> {
        let (down, _) = self.edge(node)?;
        Ok(self.weights.get(down - 1))
    }

    fn edge(&self, node: usize) -> Result<(usize, usize)> {
        if self.check(node)? == self.root {
            return Err(Error::RootEdge);
        }
        Ok(self.edges.get(node))
    }
}
