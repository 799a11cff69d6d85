use crate::traits::CollectionKind;

/// The two primitives a kind supplies for an element type `T`: allocate an
/// empty container and add one element to it.
///
/// Element preconditions (`Eq + Hash`, `Ord`, ...) go on the impl, so a kind
/// only accepts the element types its container can hold.
pub trait Insert<T>: CollectionKind {
    /// Rejection raised by [`Insert::add`]. `Infallible` for kinds that accept
    /// every value.
    type Error;

    /// Fresh, empty container. Must not share storage with any earlier result.
    fn make() -> Self::Collection<T>;

    /// Adds `value` in place. Repeated calls accumulate.
    fn add(collection: &mut Self::Collection<T>, value: T) -> Result<(), Self::Error>;

    /// Capacity hint ahead of `additional` insertions.
    #[inline]
    fn reserve_hint(_collection: &mut Self::Collection<T>, _additional: usize) {}
}
