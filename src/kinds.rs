//! Sample kinds shipped with the crate. Each one is an ordinary registration
//! and uses nothing that an external crate could not.

mod custom_set;
mod deque;
mod hash_set;
mod ordered_set;
mod sequence;

pub use custom_set::CUSTOM_SET;
pub use custom_set::CustomSet;
pub use custom_set::CustomSetKind;
pub use deque::DEQUE;
pub use deque::DequeKind;
pub use hash_set::DefaultHashBuilder;
pub use hash_set::HASH_SET;
pub use hash_set::HashSetKind;
pub use ordered_set::ORDERED_SET;
pub use ordered_set::OrderedSetKind;
pub use sequence::SEQUENCE;
pub use sequence::SequenceKind;
