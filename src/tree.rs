use crate::error::{Error, Result};

pub const ROOT: usize = 1;

/// Static rooted tree with nodes `1..=len()` and a weight on every parent edge.
///
/// Children keep their attachment order; the Euler tour visits them in that order.
#[derive(Clone, Debug)]
pub struct Tree {
    // slot 0 is unused so that node ids index directly
    parents: Vec<usize>,
    weights: Vec<i64>,
    children: Vec<Vec<usize>>,
}

impl Tree {
    /// A tree holding only the root.
    pub fn singleton() -> Self {
        Self {
            parents: vec![0; 2],
            weights: vec![0; 2],
            children: vec![Vec::new(); 2],
        }
    }

    /// Builds the tree from `(parent, weight)` pairs for nodes `2, 3, ...` in order.
    ///
    /// A parent may be a node that is attached later; connectivity is checked by the tour.
    pub fn from_parents<Iter: IntoIterator<Item = (usize, i64)>>(edges: Iter) -> Result<Self> {
        let edges: Vec<_> = edges.into_iter().collect();
        let len = edges.len() + 1;
        if let Some(&(node, _)) = edges.iter().find(|&&(p, _)| p == 0 || p > len) {
            return Err(Error::NodeOutOfRange { node, len });
        }

        let mut parents = Vec::with_capacity(len + 1);
        let mut weights = Vec::with_capacity(len + 1);
        let mut children = vec![Vec::new(); len + 1];
        parents.extend([0, 0]);
        weights.extend([0, 0]);
        for (i, (parent, weight)) in edges.into_iter().enumerate() {
            parents.push(parent);
            weights.push(weight);
            children[parent].push(i + 2);
        }

        Ok(Self {
            parents,
            weights,
            children,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len() - 1
    }

    #[inline]
    pub fn root(&self) -> usize {
        ROOT
    }

    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        (1..=self.len()).contains(&node)
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == ROOT || !self.contains(node) {
            None
        } else {
            Some(self.parents[node])
        }
    }

    /// Weight of the edge to the parent, `0` for the root.
    #[inline]
    pub fn weight(&self, node: usize) -> i64 {
        self.weights[node]
    }

    #[inline]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }
}
