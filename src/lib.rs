#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::inline_always)]

//! Collection-kind polymorphic `map`.
//!
//! A *kind* is a family of containers indexed by element type (`Vec<_>`,
//! `HashSet<_>`, ...). Kinds register by implementing [`CollectionKind`] for a
//! marker type and [`Insert`] for the element types they accept. A
//! [`CollectionDescription`] is the runtime handle of one kind, and [`map`]
//! turns a container of kind `K` over `A` into a container of kind `K` over `B`.
//!
//! ```
//! use kind_map::kinds::{CustomSet, CUSTOM_SET, SEQUENCE};
//!
//! let labels = kind_map::map(&SEQUENCE, &vec![1, 2, 3], |value| (value / 2).to_string());
//! assert_eq!(labels, ["0", "1", "1"]);
//!
//! let halves = kind_map::map(&CUSTOM_SET, &CustomSet::from([1, 2, 3]), |value| value / 2);
//! assert_eq!(halves, CustomSet::from([0, 1]));
//! ```

#[doc(hidden)]
pub extern crate alloc;

#[cfg(feature = "registry")]
#[doc(hidden)]
pub use inventory;

mod description;
mod error;
mod macros;
mod map;
mod traits;

pub mod kinds;
/// Runtime kind index
/// Only available when the "registry" feature is enabled
#[cfg(feature = "registry")]
pub mod registry;

pub use crate::description::CollectionDescription;
pub use crate::error::RegistryError;
pub use crate::map::MapExt;
pub use crate::map::Mapped;
pub use crate::map::map;
pub use crate::map::map_checked;
pub use crate::map::try_map;
pub use crate::map::try_map_checked;
pub use crate::traits::CollectionKind;
pub use crate::traits::CollectionOf;
pub use crate::traits::Container;
pub use crate::traits::Duplicates;
pub use crate::traits::Insert;
pub use crate::traits::IterationOrder;
pub use crate::traits::Iterable;
pub use crate::traits::KindId;
pub use crate::traits::validate_kind_name;
