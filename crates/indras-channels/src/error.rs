//! Error types for indras-channels
//!
//! The only failure a change log knows about is a malformed entry handed to
//! [`ChangeLog::add`](crate::ChangeLog::add). Every other operation accepts any
//! input and always succeeds.

use thiserror::Error;

/// Errors that can occur when admitting entries to a change log
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeLogError {
    /// Sequence numbers start at 1; zero is reserved for "nothing seen"
    #[error("Invalid entry: zero sequence (doc {doc_id:?}, rev {rev_id:?})")]
    ZeroSequence { doc_id: String, rev_id: String },

    #[error("Invalid entry: empty document ID at sequence {sequence}")]
    EmptyDocId { sequence: u64 },

    #[error("Invalid entry: empty revision ID at sequence {sequence} (doc {doc_id:?})")]
    EmptyRevId { sequence: u64, doc_id: String },

    /// Flag byte has bits outside DELETED | REMOVED | HIDDEN
    #[error("Invalid entry: flags {bits:#04x} out of range at sequence {sequence}")]
    InvalidFlags { sequence: u64, bits: u8 },
}

impl ChangeLogError {
    /// Whether this error describes an entry that failed validation
    ///
    /// Always true today; kept so callers can match on intent rather than on
    /// individual variants.
    pub fn is_invalid_entry(&self) -> bool {
        matches!(
            self,
            Self::ZeroSequence { .. }
                | Self::EmptyDocId { .. }
                | Self::EmptyRevId { .. }
                | Self::InvalidFlags { .. }
        )
    }

    /// Sequence number of the rejected entry, when it had one
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Self::ZeroSequence { .. } => None,
            Self::EmptyDocId { sequence }
            | Self::EmptyRevId { sequence, .. }
            | Self::InvalidFlags { sequence, .. } => Some(*sequence),
        }
    }
}

/// Result type for change log operations
pub type ChangeLogResult<T> = Result<T, ChangeLogError>;
