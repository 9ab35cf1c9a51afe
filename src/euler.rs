use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Linearization of a [`Tree`] by a depth-first walk from the root.
///
/// * `tour` has `2m - 1` steps: a node is recorded when entered and again after
///   each of its children returns.
/// * `depths[k]` is the depth of `tour[k]`.
/// * `order` has `2m` steps: every node once when entered and once when left.
/// * `weights` follows `order` with `+w` on entering and `-w` on leaving, minus
///   the root's two entries. Step `k` of `order` is therefore `weights[k - 1]`.
#[derive(Clone, Debug)]
pub struct EulerTour {
    tour: Vec<usize>,
    depths: Vec<usize>,
    order: Vec<usize>,
    weights: Vec<i64>,
}

impl EulerTour {
    /// O(n), with an explicit stack so tree depth never reaches the call stack.
    pub fn build(tree: &Tree) -> Result<Self> {
        let len = tree.len();
        let root = tree.root();
        let mut tour = Vec::with_capacity(2 * len - 1);
        let mut depths = Vec::with_capacity(2 * len - 1);
        let mut order = Vec::with_capacity(2 * len);
        let mut weights = Vec::with_capacity(2 * len);

        // (node, index of the next child to descend into)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        tour.push(root);
        depths.push(0);
        order.push(root);
        weights.push(tree.weight(root));
        stack.push((root, 0));

        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            if let Some(&child) = tree.children(node).get(*next) {
                *next += 1;
                tour.push(child);
                depths.push(stack.len());
                order.push(child);
                weights.push(tree.weight(child));
                stack.push((child, 0));
            } else {
                order.push(node);
                weights.push(-tree.weight(node));
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    tour.push(parent);
                    depths.push(stack.len() - 1);
                }
            }
        }

        let reached = order.len() / 2;
        if reached != len {
            return Err(Error::Disconnected { reached, len });
        }

        // the root has no parent edge
        weights.pop();
        weights.remove(0);

        debug!(nodes = len, tour = tour.len(), "built euler tour");
        Ok(Self {
            tour,
            depths,
            order,
            weights,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    #[inline]
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    #[inline]
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }
}
