pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

#[derive(Clone, Copy, Debug)]
pub struct NumAdditiveGroups<T>(std::marker::PhantomData<T>);

impl<T> Default for NumAdditiveGroups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditiveGroups<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditiveGroups<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditiveGroups<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditiveGroups<T> {}

/// A tour step's depth together with the node visited there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthMin {
    pub depth: usize,
    pub node: usize,
}

impl DepthMin {
    /// Fills the padding leaves. Deeper than any real step, and node `0` is never a valid id.
    pub const PADDING: Self = Self {
        depth: usize::MAX,
        node: 0,
    };

    #[inline]
    pub const fn new(depth: usize, node: usize) -> Self {
        Self { depth, node }
    }
}

/// Minimum by depth, carrying the node along. Ties keep the left operand, so the
/// operation stays associative but is not commutative.
#[derive(Clone, Copy, Debug)]
pub struct MinDepth {
    padding: DepthMin,
}

impl Default for MinDepth {
    fn default() -> Self {
        Self::new()
    }
}

impl MinDepth {
    pub const fn new() -> Self {
        Self::with_padding(DepthMin::PADDING)
    }

    pub const fn with_padding(padding: DepthMin) -> Self {
        Self { padding }
    }
}

impl Magma for MinDepth {
    type Elem = DepthMin;

    #[inline]
    fn add(&self, lhs: DepthMin, rhs: DepthMin) -> DepthMin {
        if rhs.depth < lhs.depth {
            rhs
        } else {
            lhs
        }
    }
}
impl Identity for MinDepth {
    #[inline]
    fn id(&self) -> DepthMin {
        self.padding
    }
}
impl Associativity for MinDepth {}
