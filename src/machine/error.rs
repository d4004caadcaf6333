//! Errors raised while registering and firing transitions.

use thiserror::Error;

/// Configuration errors found while registering transitions.
///
/// These are programmer mistakes and should fail fast at setup time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Transition for event '{event}' in state '{state}' is already registered")]
    DuplicateTransition { state: String, event: String },
}

/// Outcomes of a rejected or failed `fire`.
///
/// `NoMatchingTransition` and `GuardRejected` are ordinary control flow:
/// most states reject most events. `ActionFailed` means the transition's
/// action faulted, in which case neither the state nor the context changed.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("No transition for event '{event}' in state '{state}'")]
    NoMatchingTransition { state: String, event: String },

    #[error("Guard rejected event '{event}' in state '{state}'")]
    GuardRejected { state: String, event: String },

    #[error("Action for event '{event}' in state '{state}' failed: {source}")]
    ActionFailed {
        state: String,
        event: String,
        #[source]
        source: ActionError,
    },
}

impl TransitionError {
    /// True for expected rejections, false for action faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NoMatchingTransition { .. } | Self::GuardRejected { .. }
        )
    }

    /// Name of the state the machine was (and still is) in.
    pub fn state(&self) -> &str {
        match self {
            Self::NoMatchingTransition { state, .. }
            | Self::GuardRejected { state, .. }
            | Self::ActionFailed { state, .. } => state,
        }
    }
}

/// Failure reported by a transition action.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error with a short description.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
