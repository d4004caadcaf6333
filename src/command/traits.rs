//! The `Command` trait and how commands are reversed.

use super::error::CommandError;

/// How the invoker reverses a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reversal {
    /// The command carries its own inverse in [`Command::undo`].
    SelfUndoing,

    /// The invoker restores the receiver's previous snapshot.
    HistoryBacked,

    /// The command does not change receiver state and is not recorded.
    Unrecorded,
}

/// A request executed against a receiver of type `R`.
///
/// # Example
///
/// ```rust
/// use turnstile::command::{Command, CommandError, Reversal};
///
/// struct Light {
///     on: bool,
/// }
///
/// struct Toggle;
///
/// impl Command<Light> for Toggle {
///     fn name(&self) -> &str {
///         "toggle"
///     }
///
///     fn reversal(&self) -> Reversal {
///         Reversal::SelfUndoing
///     }
///
///     fn execute(&mut self, light: &mut Light) -> Result<(), CommandError> {
///         light.on = !light.on;
///         Ok(())
///     }
///
///     fn undo(&mut self, light: &mut Light) -> Result<(), CommandError> {
///         self.execute(light)
///     }
/// }
///
/// let mut light = Light { on: false };
/// let mut toggle = Toggle;
/// toggle.execute(&mut light).unwrap();
/// assert!(light.on);
/// toggle.undo(&mut light).unwrap();
/// assert!(!light.on);
/// ```
pub trait Command<R>: Send {
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// How this command is reversed. Defaults to history-backed.
    fn reversal(&self) -> Reversal {
        Reversal::HistoryBacked
    }

    /// Apply the command's effect.
    fn execute(&mut self, receiver: &mut R) -> Result<(), CommandError>;

    /// Apply the inverse effect. Only called for self-undoing commands.
    fn undo(&mut self, _receiver: &mut R) -> Result<(), CommandError> {
        Err(CommandError::NotReversible {
            command: self.name().to_string(),
        })
    }
}
