use alloc::collections::BTreeSet;
use core::convert::Infallible;

use crate::description::CollectionDescription;
use crate::traits::CollectionKind;
use crate::traits::Container;
use crate::traits::Duplicates;
use crate::traits::Insert;
use crate::traits::IterationOrder;

/// Sorted set backed by [`BTreeSet`]. Elements need `Ord`.
pub enum OrderedSetKind {}

impl CollectionKind for OrderedSetKind {
    const NAME: &'static str = "ordered_set";
    const ORDER: IterationOrder = IterationOrder::Sorted;
    const DUPLICATES: Duplicates = Duplicates::Collapsed;

    type Collection<T> = BTreeSet<T>;
}

impl<T: Ord> Insert<T> for OrderedSetKind {
    type Error = Infallible;

    #[inline(always)]
    fn make() -> BTreeSet<T> {
        BTreeSet::new()
    }

    #[inline(always)]
    fn add(collection: &mut BTreeSet<T>, value: T) -> Result<(), Infallible> {
        let _ = BTreeSet::insert(collection, value);
        Ok(())
    }
}

impl<T> Container for BTreeSet<T> {
    type Kind = OrderedSetKind;
}

pub static ORDERED_SET: CollectionDescription<OrderedSetKind> = CollectionDescription::new();
