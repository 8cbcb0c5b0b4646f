use thiserror::Error;

/// The reason an action was rejected by the raw
/// [Store](crate::Store) dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("Actions must be plain objects. Use custom middleware for async actions.")]
    NotPlainObject,
    #[error("Actions may not have an undefined \"type\" property. Have you misspelled a constant?")]
    MissingType,
}

/// Errors produced while dispatching to, or constructing, a
/// [Store](crate::Store).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidAction(#[from] InvalidAction),
    #[error("Reducers may not dispatch actions.")]
    Reentrancy,
    #[error("The store behind this dispatcher has been dropped.")]
    StoreDropped,
    /// A failure raised by application code running inside the
    /// store: a reducer, listener, middleware or thunk.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Returns `true` if this error was caused by an action failing
    /// validation.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, StoreError::InvalidAction(_))
    }
}
