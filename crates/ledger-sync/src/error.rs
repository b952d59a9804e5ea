//! Synchronizer Errors
//!
//! Every failure, whatever its origin, ends up as one message in the
//! view-state `error` field. `SyncError` renders that message.

use thiserror::Error;

use crate::draft::ValidationError;
use crate::gateway::GatewayError;

pub type SyncResult<T> = Result<T, SyncError>;

/// The operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Fetch,
    Create,
    Update,
    Delete,
    /// Composite load of records plus summaries
    Refresh,
}

impl Action {
    /// User-facing message prefix, e.g. "Error creating note"
    pub fn describe(self, noun: &str, plural: &str) -> String {
        match self {
            Action::Load => format!("Failed to load {plural}"),
            Action::Fetch => format!("Failed to fetch {noun}"),
            Action::Create => format!("Error creating {noun}"),
            Action::Update => format!("Error updating {noun}"),
            Action::Delete => format!("Error deleting {noun}"),
            Action::Refresh => "Failed to load data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncErrorKind {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{context}: {kind}")]
pub struct SyncError {
    pub action: Action,
    pub context: String,
    #[source]
    pub kind: SyncErrorKind,
}

impl SyncError {
    pub fn new(action: Action, noun: &str, plural: &str, kind: SyncErrorKind) -> Self {
        Self {
            action,
            context: action.describe(noun, plural),
            kind,
        }
    }

    /// True when the gateway was never reached
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, SyncErrorKind::Invalid(_))
    }
}
