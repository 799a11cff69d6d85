use core::convert::Infallible;
use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::marker::PhantomData;
use std::collections::HashSet;
use std::collections::hash_set;

use crate::description::CollectionDescription;
use crate::kinds::DefaultHashBuilder;
use crate::traits::CollectionKind;
use crate::traits::Container;
use crate::traits::Duplicates;
use crate::traits::Insert;
use crate::traits::IterationOrder;
use crate::traits::Iterable;

/// Set that only lets elements in and lets you walk them.
///
/// Wraps a [`HashSet`] but exposes neither removal nor membership tests,
/// which is all the mapping machinery needs.
pub struct CustomSet<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

impl<T> CustomSet<T> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<T, S> CustomSet<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> CustomSet<T, S> {
    /// Inserts `value`; a value equal to one already held is dropped.
    #[inline]
    pub fn add(&mut self, value: T) {
        self.inner.insert(value);
    }
}

impl<T> Default for CustomSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Clone> Clone for CustomSet<T, S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for CustomSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for CustomSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for CustomSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for CustomSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: HashSet::from_iter(iter),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for CustomSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, S> IntoIterator for &'a CustomSet<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, S> Iterable for CustomSet<T, S> {
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        T: 'a,
        S: 'a;

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.inner.len()
    }
}

/// Kind for [`CustomSet`].
pub struct CustomSetKind<S = DefaultHashBuilder> {
    _hasher: PhantomData<fn() -> S>,
}

impl<S: 'static> CollectionKind for CustomSetKind<S> {
    const NAME: &'static str = "custom_set";
    const ORDER: IterationOrder = IterationOrder::Unspecified;
    const DUPLICATES: Duplicates = Duplicates::Collapsed;

    type Collection<T> = CustomSet<T, S>;
}

impl<T, S> Insert<T> for CustomSetKind<S>
where
    T: Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    type Error = Infallible;

    #[inline(always)]
    fn make() -> CustomSet<T, S> {
        CustomSet::with_hasher(S::default())
    }

    #[inline(always)]
    fn add(collection: &mut CustomSet<T, S>, value: T) -> Result<(), Infallible> {
        collection.add(value);
        Ok(())
    }

    #[inline]
    fn reserve_hint(collection: &mut CustomSet<T, S>, additional: usize) {
        collection.inner.reserve(additional);
    }
}

impl<T, S: 'static> Container for CustomSet<T, S> {
    type Kind = CustomSetKind<S>;
}

pub static CUSTOM_SET: CollectionDescription<CustomSetKind> = CollectionDescription::new();
