use sem_core::SemanticError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// An aggregate operation was called on a host that was never equipped.
    #[error("host has not been equipped with a semantic list")]
    NotEquipped,

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

pub type HostResult<T> = Result<T, HostError>;
