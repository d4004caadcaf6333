//! Executes commands against a receiver and reverses them.

use super::error::CommandError;
use super::traits::{Command, Reversal};
use crate::history::{HistoryConfig, HistoryError, Restorable, SnapshotHistory};
use std::collections::VecDeque;

/// How to reverse one executed command.
enum Entry<R> {
    SelfUndoing(Box<dyn Command<R>>),
    HistoryBacked(String),
}

impl<R> Entry<R> {
    fn name(&self) -> &str {
        match self {
            Entry::SelfUndoing(command) => command.name(),
            Entry::HistoryBacked(name) => name,
        }
    }
}

/// Runs commands against an owned receiver and keeps their undo log.
///
/// Every recorded command also records the receiver's snapshot afterwards, so
/// the undo log and the history cursor move in lockstep: the log holds one
/// entry per snapshot after the initial one. Undo of a history-backed command
/// restores the previous snapshot; undo of a self-undoing command calls its
/// inverse and steps the cursor back.
///
/// Executing a new command after an undo discards everything that could have
/// been redone.
///
/// # Example
///
/// ```rust
/// use turnstile::command::{Command, CommandError, CommandInvoker};
/// use turnstile::history::Restorable;
///
/// #[derive(Default)]
/// struct Editor {
///     text: String,
/// }
///
/// impl Restorable for Editor {
///     type Snapshot = String;
///
///     fn snapshot(&self) -> String {
///         self.text.clone()
///     }
///
///     fn restore(&mut self, snapshot: &String) {
///         self.text = snapshot.clone();
///     }
/// }
///
/// struct Type(&'static str);
///
/// impl Command<Editor> for Type {
///     fn name(&self) -> &str {
///         "type"
///     }
///
///     fn execute(&mut self, editor: &mut Editor) -> Result<(), CommandError> {
///         editor.text.push_str(self.0);
///         Ok(())
///     }
/// }
///
/// let mut invoker = CommandInvoker::new(Editor::default());
/// invoker.execute(Type("Hola")).unwrap();
/// invoker.execute(Type(" Mundo")).unwrap();
///
/// invoker.undo().unwrap();
/// assert_eq!(invoker.receiver().text, "Hola");
/// invoker.undo().unwrap();
/// assert_eq!(invoker.receiver().text, "");
/// assert_eq!(invoker.undo(), Err(CommandError::NothingToUndo));
/// ```
pub struct CommandInvoker<R: Restorable> {
    receiver: R,
    history: SnapshotHistory<R::Snapshot>,
    undo_log: VecDeque<Entry<R>>,
    redo_log: Vec<Entry<R>>,
}

impl<R: Restorable> CommandInvoker<R> {
    /// Take ownership of `receiver` and record its initial snapshot.
    pub fn new(receiver: R) -> Self {
        let mut history = SnapshotHistory::new();
        history.push(receiver.snapshot());
        Self {
            receiver,
            history,
            undo_log: VecDeque::new(),
            redo_log: Vec::new(),
        }
    }

    /// Like [`new`](Self::new), with a configured history.
    ///
    /// With a capacity of `n`, at most `n - 1` commands can be undone.
    pub fn with_config(receiver: R, config: HistoryConfig) -> Result<Self, HistoryError> {
        let mut history = SnapshotHistory::with_config(config)?;
        history.push(receiver.snapshot());
        Ok(Self {
            receiver,
            history,
            undo_log: VecDeque::new(),
            redo_log: Vec::new(),
        })
    }

    /// Execute a command.
    pub fn execute<C>(&mut self, command: C) -> Result<(), CommandError>
    where
        C: Command<R> + 'static,
    {
        self.execute_boxed(Box::new(command))
    }

    /// Execute an already boxed command, such as one looked up from a key
    /// binding table.
    ///
    /// If any command fails, the receiver is restored to the snapshot taken
    /// just before it ran, so a partial change never leaks into the next
    /// recorded snapshot.
    pub fn execute_boxed(&mut self, mut command: Box<dyn Command<R>>) -> Result<(), CommandError> {
        let reversal = command.reversal();
        let before = self.receiver.snapshot();

        if let Err(error) = command.execute(&mut self.receiver) {
            tracing::warn!(command = command.name(), error = %error, "command failed");
            self.receiver.restore(&before);
            return Err(error);
        }

        tracing::debug!(command = command.name(), ?reversal, "command executed");
        let entry = match reversal {
            Reversal::Unrecorded => return Ok(()),
            Reversal::SelfUndoing => Entry::SelfUndoing(command),
            Reversal::HistoryBacked => Entry::HistoryBacked(command.name().to_string()),
        };

        self.history.push(self.receiver.snapshot());
        self.undo_log.push_back(entry);
        self.redo_log.clear();

        // A bounded history may have evicted its oldest snapshot.
        let reachable = self.history.position().unwrap_or(0);
        while self.undo_log.len() > reachable {
            self.undo_log.pop_front();
        }
        Ok(())
    }

    /// Reverse the most recent recorded command.
    pub fn undo(&mut self) -> Result<(), CommandError> {
        let Some(mut entry) = self.undo_log.pop_back() else {
            tracing::debug!("nothing to undo");
            return Err(CommandError::NothingToUndo);
        };

        let outcome = match &mut entry {
            Entry::SelfUndoing(command) => command.undo(&mut self.receiver).map(|()| {
                let stepped = self.history.undo().is_some();
                debug_assert!(stepped, "undo log is ahead of the history cursor");
            }),
            Entry::HistoryBacked(_) => match self.history.undo() {
                Some(previous) => {
                    self.receiver.restore(previous);
                    Ok(())
                }
                None => Err(CommandError::NothingToUndo),
            },
        };

        if let Err(error) = outcome {
            tracing::warn!(command = entry.name(), error = %error, "undo failed");
            self.undo_log.push_back(entry);
            return Err(error);
        }

        tracing::debug!(command = entry.name(), "command undone");
        self.redo_log.push(entry);
        Ok(())
    }

    /// Re-apply the most recently undone command.
    pub fn redo(&mut self) -> Result<(), CommandError> {
        let Some(mut entry) = self.redo_log.pop() else {
            tracing::debug!("nothing to redo");
            return Err(CommandError::NothingToRedo);
        };

        let outcome = match &mut entry {
            Entry::SelfUndoing(command) => command.execute(&mut self.receiver).map(|()| {
                let stepped = self.history.redo().is_some();
                debug_assert!(stepped, "redo log is ahead of the history cursor");
            }),
            Entry::HistoryBacked(_) => match self.history.redo() {
                Some(next) => {
                    self.receiver.restore(next);
                    Ok(())
                }
                None => Err(CommandError::NothingToRedo),
            },
        };

        if let Err(error) = outcome {
            tracing::warn!(command = entry.name(), error = %error, "redo failed");
            self.redo_log.push(entry);
            return Err(error);
        }

        tracing::debug!(command = entry.name(), "command redone");
        self.undo_log.push_back(entry);
        Ok(())
    }

    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    pub fn history(&self) -> &SnapshotHistory<R::Snapshot> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_log.is_empty()
    }

    /// Names of undoable commands, oldest first.
    pub fn undo_names(&self) -> Vec<&str> {
        self.undo_log.iter().map(Entry::name).collect()
    }

    /// Give the receiver back, dropping the history.
    pub fn into_receiver(self) -> R {
        self.receiver
    }
}
