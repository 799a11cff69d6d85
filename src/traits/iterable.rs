use alloc::collections::BTreeSet;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use std::collections::HashSet;

/// Element-by-element iteration, the only structural capability a container
/// needs to take part in kind-polymorphic mapping.
///
/// Every element must be yielded exactly once. The order is whatever the
/// container defines.
#[diagnostic::on_unimplemented(
    message = "`{Self}` must support element-by-element iteration",
    label = "not iterable",
    note = "implement `kind_map::Iterable` for `{Self}` before registering it as a collection kind"
)]
pub trait Iterable {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    #[inline]
    fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Iterable for Vec<T> {
    type Item = T;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = alloc::collections::vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = alloc::collections::btree_set::Iter<'a, T>
    where
        T: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }
}

// No bounds on T or S: iteration never hashes, so the capability holds for
// every element type the kind can be instantiated with.
impl<T, S> Iterable for HashSet<T, S> {
    type Item = T;
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        T: 'a,
        S: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }
}
