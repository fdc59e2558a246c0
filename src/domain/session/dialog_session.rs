//! Dialog session state machine

use std::fmt;
use thiserror::Error;

/// Dialog session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogState {
    #[default]
    Open,
    Validating,
    Confirmed,
    Cancelled,
}

impl DialogState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Validating => "validating",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: DialogState,
    pub action: String,
}

/// Dialog session entity.
/// Tracks the lifecycle of one modal interaction.
///
/// State machine:
///   OPEN -> VALIDATING (begin_validation)
///   VALIDATING -> OPEN (reject)
///   VALIDATING -> CONFIRMED (confirm)
///   OPEN -> CANCELLED (cancel)
#[derive(Debug, Default)]
pub struct DialogSession {
    state: DialogState,
}

impl DialogSession {
    /// Create a new session in open state
    pub fn new() -> Self {
        Self {
            state: DialogState::Open,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Fail unless the session accepts user events
    pub fn ensure_open(&self, action: &str) -> Result<(), InvalidStateTransition> {
        if self.state != DialogState::Open {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    /// Transition from OPEN to VALIDATING
    pub fn begin_validation(&mut self) -> Result<(), InvalidStateTransition> {
        self.ensure_open("confirm")?;
        self.state = DialogState::Validating;
        Ok(())
    }

    /// Transition from VALIDATING back to OPEN
    pub fn reject(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != DialogState::Validating {
            return Err(self.invalid("reject input"));
        }
        self.state = DialogState::Open;
        Ok(())
    }

    /// Transition from VALIDATING to CONFIRMED
    pub fn confirm(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != DialogState::Validating {
            return Err(self.invalid("accept input"));
        }
        self.state = DialogState::Confirmed;
        Ok(())
    }

    /// Transition from OPEN to CANCELLED
    pub fn cancel(&mut self) -> Result<(), InvalidStateTransition> {
        self.ensure_open("cancel")?;
        self.state = DialogState::Cancelled;
        Ok(())
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}
