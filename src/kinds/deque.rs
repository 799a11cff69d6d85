use alloc::collections::VecDeque;
use core::convert::Infallible;

use crate::description::CollectionDescription;
use crate::traits::CollectionKind;
use crate::traits::Container;
use crate::traits::Duplicates;
use crate::traits::Insert;
use crate::traits::IterationOrder;

/// Ordered sequence backed by [`VecDeque`], filled with `push_back`.
pub enum DequeKind {}

impl CollectionKind for DequeKind {
    const NAME: &'static str = "deque";
    const ORDER: IterationOrder = IterationOrder::Insertion;
    const DUPLICATES: Duplicates = Duplicates::Retained;

    type Collection<T> = VecDeque<T>;
}

impl<T> Insert<T> for DequeKind {
    type Error = Infallible;

    #[inline(always)]
    fn make() -> VecDeque<T> {
        VecDeque::new()
    }

    #[inline(always)]
    fn add(collection: &mut VecDeque<T>, value: T) -> Result<(), Infallible> {
        collection.push_back(value);
        Ok(())
    }

    #[inline]
    fn reserve_hint(collection: &mut VecDeque<T>, additional: usize) {
        collection.reserve(additional);
    }
}

impl<T> Container for VecDeque<T> {
    type Kind = DequeKind;
}

pub static DEQUE: CollectionDescription<DequeKind> = CollectionDescription::new();
