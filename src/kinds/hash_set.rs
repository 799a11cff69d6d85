use core::convert::Infallible;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::marker::PhantomData;
use std::collections::HashSet;

use crate::description::CollectionDescription;
use crate::traits::CollectionKind;
use crate::traits::Container;
use crate::traits::Duplicates;
use crate::traits::Insert;
use crate::traits::IterationOrder;

#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;
#[cfg(not(feature = "ahash"))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Native unordered set backed by [`HashSet`], parameterized by its hasher.
///
/// Each hasher is a distinct kind: mapping a `HashSet<T, S>` yields a
/// `HashSet<U, S>` built with `S::default()`.
pub struct HashSetKind<S = DefaultHashBuilder> {
    _hasher: PhantomData<fn() -> S>,
}

impl<S: 'static> CollectionKind for HashSetKind<S> {
    const NAME: &'static str = "hash_set";
    const ORDER: IterationOrder = IterationOrder::Unspecified;
    const DUPLICATES: Duplicates = Duplicates::Collapsed;

    type Collection<T> = HashSet<T, S>;
}

impl<T, S> Insert<T> for HashSetKind<S>
where
    T: Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    type Error = Infallible;

    #[inline(always)]
    fn make() -> HashSet<T, S> {
        HashSet::with_hasher(S::default())
    }

    #[inline(always)]
    fn add(collection: &mut HashSet<T, S>, value: T) -> Result<(), Infallible> {
        let _ = HashSet::insert(collection, value);
        Ok(())
    }

    #[inline]
    fn reserve_hint(collection: &mut HashSet<T, S>, additional: usize) {
        collection.reserve(additional);
    }
}

impl<T, S: 'static> Container for HashSet<T, S> {
    type Kind = HashSetKind<S>;
}

pub static HASH_SET: CollectionDescription<HashSetKind> = CollectionDescription::new();
