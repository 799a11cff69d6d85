use core::any::TypeId;
use core::fmt;

use crate::traits::Iterable;

/// Opaque identity of a registered collection kind.
///
/// Derived from the kind marker's [`TypeId`], so two kinds never share an id
/// even when their diagnostic names collide.
#[derive(Clone, Copy)]
pub struct KindId {
    type_id: TypeId,
    name: &'static str,
}

impl KindId {
    #[inline]
    pub fn of<K: CollectionKind>() -> Self {
        Self {
            type_id: TypeId::of::<K>(),
            name: K::NAME,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for KindId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for KindId {}

impl core::hash::Hash for KindId {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KindId").field(&self.name).finish()
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IterationOrder {
    /// Elements come back in the order they were added.
    Insertion,
    /// Elements come back sorted by `Ord`.
    Sorted,
    /// No order is promised; it may differ between two equal containers.
    Unspecified,
}

impl IterationOrder {
    pub const fn dbg_name(self) -> &'static str {
        match self {
            IterationOrder::Insertion => "insertion",
            IterationOrder::Sorted => "sorted",
            IterationOrder::Unspecified => "unspecified",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Duplicates {
    /// Every added element is kept, equal or not.
    Retained,
    /// Equal elements collapse into one.
    Collapsed,
}

impl Duplicates {
    pub const fn dbg_name(self) -> &'static str {
        match self {
            Duplicates::Retained => "retained",
            Duplicates::Collapsed => "collapsed",
        }
    }
}

/// Type-level registry entry: maps a kind marker to the container type
/// constructor it stands for.
///
/// Implementing this trait for a marker type *is* the registration. Any crate
/// can add a kind without touching this one. The `Collection<T>` bound is the
/// capability contract: a container that cannot be iterated is rejected when
/// the impl is compiled.
///
/// ```compile_fail
/// use kind_map::{CollectionKind, Duplicates, IterationOrder};
///
/// pub struct Opaque<T>(Option<T>);
///
/// pub enum OpaqueKind {}
///
/// impl CollectionKind for OpaqueKind {
///     const NAME: &'static str = "opaque";
///     const ORDER: IterationOrder = IterationOrder::Unspecified;
///     const DUPLICATES: Duplicates = Duplicates::Retained;
///     // error: `Opaque<T>` must support element-by-element iteration
///     type Collection<T> = Opaque<T>;
/// }
/// ```
pub trait CollectionKind: 'static {
    /// Diagnostic name, a lowercase identifier such as `sequence`.
    const NAME: &'static str;
    const ORDER: IterationOrder;
    const DUPLICATES: Duplicates;

    type Collection<T>: Iterable<Item = T>;

    #[inline]
    fn id() -> KindId
    where
        Self: Sized,
    {
        KindId::of::<Self>()
    }
}

/// Resolves a kind and an element type to the concrete container type.
pub type CollectionOf<K, T> = <K as CollectionKind>::Collection<T>;

/// Reverse resolution: from a concrete container back to its kind.
///
/// Lets callers hand a plain `Vec<i32>` to [`map`](crate::map) and have both
/// the kind and the element type inferred. The equality bound rejects a
/// container that claims a kind which resolves to some other type.
pub trait Container: Iterable + Sized {
    type Kind: CollectionKind<Collection<Self::Item> = Self>;
}
