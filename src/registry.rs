//! Runtime index over every registered collection kind.
//!
//! Built-in kinds are listed here; other crates contribute entries with
//! [`register_kind!`](crate::register_kind), collected through `inventory`.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::kinds::CustomSetKind;
use crate::kinds::DequeKind;
use crate::kinds::HashSetKind;
use crate::kinds::OrderedSetKind;
use crate::kinds::SequenceKind;
use crate::traits::CollectionKind;
use crate::traits::Duplicates;
use crate::traits::IterationOrder;
use crate::traits::KindId;
use crate::traits::validate_kind_name;

/// Metadata of one registered kind.
///
/// Kinds generated from one generic marker (`HashSetKind<S>` for every
/// hasher `S`) share a name and a family but keep distinct ids.
#[derive(Clone, Copy, Debug)]
pub struct KindEntry {
    id: fn() -> KindId,
    type_name: fn() -> &'static str,
    pub name: &'static str,
    pub order: IterationOrder,
    pub duplicates: Duplicates,
}

impl KindEntry {
    pub const fn of<K: CollectionKind>() -> Self {
        validate_kind_name(K::NAME);
        Self {
            id: KindId::of::<K>,
            type_name: core::any::type_name::<K>,
            name: K::NAME,
            order: K::ORDER,
            duplicates: K::DUPLICATES,
        }
    }

    #[inline]
    pub fn id(&self) -> KindId {
        (self.id)()
    }

    /// Marker type path without its generic arguments.
    pub fn family(&self) -> &'static str {
        let type_name = (self.type_name)();
        type_name.split_once('<').map_or(type_name, |(family, _)| family)
    }

    pub const fn deduplicates(&self) -> bool {
        matches!(self.duplicates, Duplicates::Collapsed)
    }
}

inventory::collect!(KindEntry);

static BUILTIN: [KindEntry; 5] = [
    KindEntry::of::<SequenceKind>(),
    KindEntry::of::<DequeKind>(),
    KindEntry::of::<HashSetKind>(),
    KindEntry::of::<OrderedSetKind>(),
    KindEntry::of::<CustomSetKind>(),
];

struct Index {
    by_name: BTreeMap<&'static str, &'static KindEntry>,
    by_id: HashMap<KindId, &'static KindEntry>,
}

static INDEX: LazyLock<Index> = LazyLock::new(build_index);

fn build_index() -> Index {
    let mut by_name = BTreeMap::new();
    let mut by_id = HashMap::new();
    for entry in all() {
        tracing::debug!(kind = entry.name, order = entry.order.dbg_name(), duplicates = entry.duplicates.dbg_name(), "indexed collection kind");
        match by_name.get(entry.name) {
            None => {
                by_name.insert(entry.name, entry);
            }
            Some(first) if first.family() == entry.family() => {
                tracing::debug!(kind = entry.name, family = entry.family(), "kept first entry of kind family for name lookup");
            }
            Some(first) => {
                tracing::warn!(kind = entry.name, first = first.family(), later = entry.family(), "collection kind name claimed by two families, first entry wins");
            }
        }
        by_id.entry(entry.id()).or_insert(entry);
    }
    Index { by_name, by_id }
}

/// Every registered kind: built-ins first, then inventory submissions.
pub fn all() -> impl Iterator<Item = &'static KindEntry> {
    BUILTIN.iter().chain(inventory::iter::<KindEntry>)
}

/// First kind registered under `name`; built-ins come before submissions.
pub fn find(name: &str) -> Option<&'static KindEntry> {
    INDEX.by_name.get(name).copied()
}

/// Every kind registered under `name`, e.g. one hash-set kind per hasher.
pub fn find_all(name: &str) -> impl Iterator<Item = &'static KindEntry> + '_ {
    all().filter(move |entry| entry.name == name)
}

pub fn find_by_id(id: KindId) -> Option<&'static KindEntry> {
    INDEX.by_id.get(&id).copied()
}

pub fn contains<K: CollectionKind>() -> bool {
    find_by_id(KindId::of::<K>()).is_some()
}

/// Checks that every kind is registered once and that a name belongs to a
/// single kind family.
///
/// # Errors
///
/// Returns the first duplicate kind or shared name found, in registration order.
pub fn validate() -> Result<(), RegistryError> {
    let mut names = BTreeMap::new();
    let mut ids = HashSet::new();
    for entry in all() {
        if !ids.insert(entry.id()) {
            return Err(RegistryError::DuplicateKind { id: entry.id() });
        }
        let family = *names.entry(entry.name).or_insert(entry.family());
        if family != entry.family() {
            return Err(RegistryError::DuplicateName { name: entry.name });
        }
    }
    Ok(())
}
