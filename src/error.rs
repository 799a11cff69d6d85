use thiserror::Error;

use crate::traits::KindId;

/// Inconsistencies found when validating the runtime kind index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("collection kind name `{name}` is claimed by more than one kind family")]
    DuplicateName { name: &'static str },
    #[error("collection kind `{id}` is registered more than once")]
    DuplicateKind { id: KindId },
}
