//! Command error types.

use thiserror::Error;

/// Errors returned by commands and the invoker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Undo requested with an empty undo log
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo log
    #[error("Nothing to redo")]
    NothingToRedo,

    /// The command's own effect failed
    #[error("Command '{command}' failed: {message}")]
    Failed { command: String, message: String },

    /// A self-undoing command did not provide an inverse
    #[error("Command '{command}' cannot be undone")]
    NotReversible { command: String },
}

impl CommandError {
    pub fn failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// True for the empty-log outcomes of undo and redo.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NothingToUndo | Self::NothingToRedo)
    }
}
