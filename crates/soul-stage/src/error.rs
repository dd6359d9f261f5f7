//! Error types for the encounter engine.
//!
//! None of these are fatal. The engine turns every error into a single
//! report line and leaves the snapshot as it was.

use thiserror::Error;

/// Result type for engine operations.
pub type StageResult<T> = Result<T, StageError>;

/// Errors a command can produce while being applied to an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// A required argument is missing or malformed.
    #[error("Usage: {0}")]
    Usage(String),

    /// The named participant is not part of the encounter.
    #[error("{0} not found.")]
    NotFound(String),

    /// The named participant does not host a parasite.
    #[error("{0} has no parasite.")]
    NoParasite(String),

    /// The named participant carries no egg.
    #[error("{0} has no egg.")]
    NoEgg(String),

    /// The egg has already hatched and cannot be incubated again.
    #[error("Egg already hatched.")]
    EggAlreadyHatched,

    /// The participant lacks both the aura and enough resolve.
    #[error("{0} is not ready to awaken.")]
    NotReadyToAwaken(String),

    /// The dice spec could not be turned into a roll.
    #[error("Dice parse error: {0}")]
    DiceParse(String),

    /// The command name is not recognised.
    #[error("Unknown command: /{0} — use /help")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_as_report_lines() {
        assert_eq!(StageError::NotFound("Sera".into()).to_string(), "Sera not found.");
        assert_eq!(
            StageError::Usage("/awaken <name>".into()).to_string(),
            "Usage: /awaken <name>"
        );
        assert_eq!(
            StageError::UnknownCommand("dance".into()).to_string(),
            "Unknown command: /dance — use /help"
        );
        assert_eq!(StageError::EggAlreadyHatched.to_string(), "Egg already hatched.");
    }
}
