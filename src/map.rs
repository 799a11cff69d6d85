use core::convert::Infallible;

use crate::description::CollectionDescription;
use crate::traits::CollectionKind;
use crate::traits::CollectionOf;
use crate::traits::Container;
use crate::traits::Insert;

/// Output of mapping container `C` to element type `B`: same kind, new element.
pub type Mapped<C, B> = CollectionOf<<C as Container>::Kind, B>;

/// Maps every element of `input` through `selector` into a fresh container of
/// the same kind.
///
/// One `selector` call and one insertion per input element, in the input's
/// iteration order, over a single pass of `input.iter()`. `input` is only
/// borrowed. Deduplicating kinds may return
/// fewer elements than they were given.
///
/// ```
/// use kind_map::kinds::SEQUENCE;
///
/// let halves = kind_map::map(&SEQUENCE, &vec![1, 2, 3], |value| (value / 2).to_string());
/// assert_eq!(halves, ["0", "1", "1"]);
/// ```
///
/// The description must be for the input's own kind:
///
/// ```compile_fail
/// use kind_map::kinds::HASH_SET;
///
/// let _ = kind_map::map(&HASH_SET, &vec![1, 2, 3], |value| *value);
/// ```
#[inline]
pub fn map<C, B, F>(description: &CollectionDescription<C::Kind>, input: &C, mut selector: F) -> Mapped<C, B>
where
    C: Container,
    C::Kind: Insert<B, Error = Infallible>,
    F: FnMut(&C::Item) -> B,
{
    let mut output = description.make::<B>();
    let values = input.iter();
    <C::Kind as Insert<B>>::reserve_hint(&mut output, values.size_hint().0);
    for value in values {
        let Ok(()) = description.add(&mut output, selector(value));
    }
    output
}

/// [`map`] with a fallible selector: the first error aborts the pass and is
/// returned as is. The partially built output is dropped.
///
/// ```
/// use kind_map::kinds::SEQUENCE;
///
/// let parsed: Result<Vec<u8>, _> = kind_map::try_map(&SEQUENCE, &vec!["7", "x", "9"], |value| value.parse::<u8>());
/// assert!(parsed.is_err());
/// ```
pub fn try_map<C, B, E, F>(description: &CollectionDescription<C::Kind>, input: &C, mut selector: F) -> Result<Mapped<C, B>, E>
where
    C: Container,
    C::Kind: Insert<B, Error = Infallible>,
    F: FnMut(&C::Item) -> Result<B, E>,
{
    let mut output = description.make::<B>();
    let values = input.iter();
    <C::Kind as Insert<B>>::reserve_hint(&mut output, values.size_hint().0);
    for (position, value) in values.enumerate() {
        let mapped = selector(value).inspect_err(|_| trace_abort::<C::Kind>(position, "selector"))?;
        let Ok(()) = description.add(&mut output, mapped);
    }
    Ok(output)
}

/// [`map`] for kinds whose insertion can reject values: the selector is
/// total, the kind's own error comes back unchanged.
pub fn map_checked<C, B, F>(
    description: &CollectionDescription<C::Kind>,
    input: &C,
    mut selector: F,
) -> Result<Mapped<C, B>, <C::Kind as Insert<B>>::Error>
where
    C: Container,
    C::Kind: Insert<B>,
    F: FnMut(&C::Item) -> B,
{
    let mut output = description.make::<B>();
    let values = input.iter();
    <C::Kind as Insert<B>>::reserve_hint(&mut output, values.size_hint().0);
    for (position, value) in values.enumerate() {
        description.add(&mut output, selector(value)).inspect_err(|_| trace_abort::<C::Kind>(position, "insert"))?;
    }
    Ok(output)
}

/// Both failure sources at once: a fallible selector over a kind that can
/// reject insertions. Kind errors reach the caller through
/// `E: From<K::Error>`.
pub fn try_map_checked<C, B, E, F>(description: &CollectionDescription<C::Kind>, input: &C, mut selector: F) -> Result<Mapped<C, B>, E>
where
    C: Container,
    C::Kind: Insert<B>,
    E: From<<C::Kind as Insert<B>>::Error>,
    F: FnMut(&C::Item) -> Result<B, E>,
{
    let mut output = description.make::<B>();
    let values = input.iter();
    <C::Kind as Insert<B>>::reserve_hint(&mut output, values.size_hint().0);
    for (position, value) in values.enumerate() {
        let mapped = selector(value).inspect_err(|_| trace_abort::<C::Kind>(position, "selector"))?;
        description.add(&mut output, mapped).map_err(|err| {
            trace_abort::<C::Kind>(position, "insert");
            E::from(err)
        })?;
    }
    Ok(output)
}

#[inline]
fn trace_abort<K: CollectionKind>(position: usize, stage: &'static str) {
    tracing::trace!(kind = K::NAME, position, stage, "map aborted");
}

/// Method form of the free functions, available on every registered container.
pub trait MapExt: Container {
    #[inline]
    fn map_with<B, F>(&self, description: &CollectionDescription<Self::Kind>, selector: F) -> Mapped<Self, B>
    where
        Self::Kind: Insert<B, Error = Infallible>,
        F: FnMut(&Self::Item) -> B,
    {
        map(description, self, selector)
    }

    #[inline]
    fn try_map_with<B, E, F>(&self, description: &CollectionDescription<Self::Kind>, selector: F) -> Result<Mapped<Self, B>, E>
    where
        Self::Kind: Insert<B, Error = Infallible>,
        F: FnMut(&Self::Item) -> Result<B, E>,
    {
        try_map(description, self, selector)
    }
}

impl<C: Container> MapExt for C {}
