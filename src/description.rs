use core::fmt;
use core::marker::PhantomData;

use crate::traits::CollectionKind;
use crate::traits::CollectionOf;
use crate::traits::Insert;
use crate::traits::KindId;
use crate::traits::validate_kind_name;

/// Runtime handle bundling a kind's id with its `make`/`add` primitives.
///
/// The primitives stay generic over the element type: `make::<T>()` and
/// `add` resolve through [`Insert<T>`] for whatever `T` the call site picks.
/// The value itself is zero-sized and meant to live in a `static`.
///
/// A name that is not a lowercase identifier fails in const evaluation:
///
/// ```compile_fail
/// use kind_map::{CollectionDescription, CollectionKind, Duplicates, IterationOrder};
///
/// pub enum Shouty {}
///
/// impl CollectionKind for Shouty {
///     const NAME: &'static str = "Shouty";
///     const ORDER: IterationOrder = IterationOrder::Insertion;
///     const DUPLICATES: Duplicates = Duplicates::Retained;
///     type Collection<T> = Vec<T>;
/// }
///
/// pub static SHOUTY: CollectionDescription<Shouty> = CollectionDescription::new();
/// ```
pub struct CollectionDescription<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K: CollectionKind> CollectionDescription<K> {
    #[inline]
    pub const fn new() -> Self {
        const { validate_kind_name(K::NAME) };
        Self { _kind: PhantomData }
    }

    #[inline]
    pub fn id(&self) -> KindId {
        KindId::of::<K>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        K::NAME
    }

    #[inline]
    pub fn make<T>(&self) -> CollectionOf<K, T>
    where
        K: Insert<T>,
    {
        K::make()
    }

    #[inline]
    pub fn add<T>(&self, collection: &mut CollectionOf<K, T>, value: T) -> Result<(), <K as Insert<T>>::Error>
    where
        K: Insert<T>,
    {
        K::add(collection, value)
    }

    /// Builds a container of this kind from `values`, stopping at the first
    /// rejected insertion.
    pub fn collect<T, I>(&self, values: I) -> Result<CollectionOf<K, T>, <K as Insert<T>>::Error>
    where
        K: Insert<T>,
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut collection = K::make();
        K::reserve_hint(&mut collection, values.size_hint().0);
        for value in values {
            K::add(&mut collection, value)?;
        }
        Ok(collection)
    }
}

impl<K: CollectionKind> Default for CollectionDescription<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for CollectionDescription<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for CollectionDescription<K> {}

impl<K: CollectionKind> fmt::Debug for CollectionDescription<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionDescription")
            .field("kind", &K::NAME)
            .field("order", &K::ORDER)
            .field("duplicates", &K::DUPLICATES)
            .finish()
    }
}
