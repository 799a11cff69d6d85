mod insert;
mod iterable;
mod kind;
pub(crate) mod utils;

pub use insert::Insert;
pub use iterable::Iterable;
pub use kind::CollectionKind;
pub use kind::CollectionOf;
pub use kind::Container;
pub use kind::Duplicates;
pub use kind::IterationOrder;
pub use kind::KindId;
pub use utils::validate_kind_name;
