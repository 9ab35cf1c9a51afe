use crate::groups::Monoid;

/// Bottom-up segment tree over `base` leaves, `base` being a power of two.
///
/// `data[1]` is the root, the children of `i` are `2 * i` and `2 * i + 1`, and
/// leaves occupy `data[base..2 * base]`. Leaves past the loaded values hold the
/// monoid identity. `data[0]` is unused.
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    group: M,
    data: Vec<M::Elem>,
}

impl<M: Monoid> SegmentTree<M> {
    #[inline]
    pub fn new(group: M, length: usize) -> Self {
        let base = length.max(1).next_power_of_two();
        let mut data = Vec::new();
        data.resize_with(2 * base, || group.id());
        Self { group, data }
    }

    /// Number of leaves, padding included.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    fn base(&self) -> usize {
        self.len()
    }

    #[inline]
    fn pull(&mut self, i: usize) {
        let l = 2 * i;
        let r = l + 1;
        self.data[i] = self.group.add(self.data[l].clone(), self.data[r].clone());
    }

    /// Loads leaves from the start; values past `len()` are dropped.
    ///
    /// O(n)
    pub fn build<Iter: IntoIterator<Item = M::Elem>>(&mut self, iter: Iter) {
        let base = self.base();
        for (i, x) in iter.into_iter().take(base).enumerate() {
            self.data[base + i] = x;
        }
        for i in (1..base).rev() {
            self.pull(i);
        }
    }

    /// Fold of the leaves in `[l, r)`. Empty or out of range intervals give the identity.
    ///
    /// O(log n)
    pub fn sum(&self, mut l: usize, mut r: usize) -> M::Elem {
        let base = self.base();
        if l >= r || r > base {
            return self.group.id();
        }
        l += base;
        r += base;

        let mut left = self.group.id();
        let mut right = self.group.id();
        while l < r {
            if l & 1 == 1 {
                left = self.group.add(left, self.data[l].clone());
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                right = self.group.add(self.data[r].clone(), right);
            }
            l /= 2;
            r /= 2;
        }

        self.group.add(left, right)
    }

    /// Sets leaf `i` and recomputes its ancestors. Does nothing when `i >= len()`.
    ///
    /// O(log n)
    pub fn update(&mut self, mut i: usize, x: M::Elem) {
        if i >= self.base() {
            return;
        }
        i += self.base();
        self.data[i] = x;

        while i > 1 {
            i /= 2;
            self.pull(i);
        }
    }

    /// O(1)
    pub fn get(&self, i: usize) -> &M::Elem {
        &self.data[self.base() + i]
    }

    /// Fold of every leaf.
    ///
    /// O(1)
    pub fn total(&self) -> &M::Elem {
        &self.data[1]
    }
}
