#![allow(dead_code)]

use treedist::Tree;

/// Parent-walking reference for trees whose parents have smaller ids than their children.
#[derive(Clone, Debug)]
pub struct Naive {
    pub parent: Vec<usize>,
    pub weight: Vec<i64>,
    pub depth: Vec<usize>,
}

impl Naive {
    pub fn new(edges: &[(usize, i64)]) -> Self {
        let len = edges.len() + 1;
        let mut parent = vec![0; len + 1];
        let mut weight = vec![0; len + 1];
        let mut depth = vec![0; len + 1];
        for (i, &(p, w)) in edges.iter().enumerate() {
            let node = i + 2;
            assert!(p < node, "oracle expects parents before children");
            parent[node] = p;
            weight[node] = w;
            depth[node] = depth[p] + 1;
        }
        Self {
            parent,
            weight,
            depth,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn lca(&self, mut u: usize, mut v: usize) -> usize {
        while self.depth[u] > self.depth[v] {
            u = self.parent[u];
        }
        while self.depth[v] > self.depth[u] {
            v = self.parent[v];
        }
        while u != v {
            u = self.parent[u];
            v = self.parent[v];
        }
        u
    }

    pub fn distance(&self, mut u: usize, mut v: usize) -> i64 {
        let lca = self.lca(u, v);
        let mut total = 0;
        while u != lca {
            total += self.weight[u];
            u = self.parent[u];
        }
        while v != lca {
            total += self.weight[v];
            v = self.parent[v];
        }
        total
    }

    pub fn is_ancestor(&self, a: usize, mut b: usize) -> bool {
        loop {
            if a == b {
                return true;
            }
            if b == 1 {
                return false;
            }
            b = self.parent[b];
        }
    }

    pub fn update(&mut self, node: usize, weight: i64) {
        self.weight[node] = weight;
    }
}

pub fn tree(edges: &[(usize, i64)]) -> Tree {
    Tree::from_parents(edges.iter().cloned()).expect("valid parents")
}
