use alloc::vec::Vec;
use core::convert::Infallible;

use crate::description::CollectionDescription;
use crate::traits::CollectionKind;
use crate::traits::Container;
use crate::traits::Duplicates;
use crate::traits::Insert;
use crate::traits::IterationOrder;

/// Ordered sequence backed by [`Vec`]: appends, keeps duplicates.
pub enum SequenceKind {}

impl CollectionKind for SequenceKind {
    const NAME: &'static str = "sequence";
    const ORDER: IterationOrder = IterationOrder::Insertion;
    const DUPLICATES: Duplicates = Duplicates::Retained;

    type Collection<T> = Vec<T>;
}

impl<T> Insert<T> for SequenceKind {
    type Error = Infallible;

    #[inline(always)]
    fn make() -> Vec<T> {
        Vec::new()
    }

    #[inline(always)]
    fn add(collection: &mut Vec<T>, value: T) -> Result<(), Infallible> {
        collection.push(value);
        Ok(())
    }

    #[inline]
    fn reserve_hint(collection: &mut Vec<T>, additional: usize) {
        collection.reserve(additional);
    }
}

impl<T> Container for Vec<T> {
    type Kind = SequenceKind;
}

pub static SEQUENCE: CollectionDescription<SequenceKind> = CollectionDescription::new();
