use crate::engine::output::OutcomeState;
use crate::store::StoreError;
use thiserror::Error;

/// Faults a handler cannot turn into a user-facing answer on its own.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Store(#[from] StoreError),
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Final state and text of one handled turn, before it is wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub state: OutcomeState,
    pub message: String,
}

impl Reply {
    pub fn fulfilled(message: impl Into<String>) -> Self {
        Self {
            state: OutcomeState::Fulfilled,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: OutcomeState::Failed,
            message: message.into(),
        }
    }
}

/// Which key the student handler queries with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StudentKeyPolicy {
    /// The validated `StudentID` slot value.
    #[default]
    FromSlot,
    /// Always this id, whatever the caller asked for.
    Fixed(String),
}

impl StudentKeyPolicy {
    pub fn resolve<'a>(&'a self, requested: &'a str) -> &'a str {
        match self {
            StudentKeyPolicy::FromSlot => requested,
            StudentKeyPolicy::Fixed(id) => id,
        }
    }
}
