//! Revision events recorded in a channel's change log

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{ChangeLogError, ChangeLogResult};

bitflags! {
    /// State bits carried by a revision event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EntryFlags: u8 {
        /// The revision is a tombstone
        const DELETED = 1 << 0;
        /// The document was removed from the channel by this revision
        const REMOVED = 1 << 1;
        /// The revision should not be shown in change feeds
        const HIDDEN = 1 << 2;
    }
}

impl EntryFlags {
    /// Largest raw value a valid entry may carry
    pub const MAX: u8 = Self::all().bits();

    /// Build flags from a raw byte, keeping any undefined bits
    ///
    /// Undefined bits are not masked off here so that
    /// [`LogEntry::validate`] can reject them.
    pub fn from_raw(bits: u8) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether only DELETED, REMOVED and HIDDEN may be set
    pub fn is_in_range(&self) -> bool {
        self.bits() <= Self::MAX
    }
}

/// A single document revision added to a channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    /// Producer-assigned sequence number, never zero
    pub sequence: u64,
    /// Document identifier
    pub doc_id: String,
    /// Revision identifier
    pub rev_id: String,
    /// Deleted/removed/hidden state
    pub flags: EntryFlags,
}

impl LogEntry {
    /// Create a new entry
    ///
    /// No validation happens here; the change log checks entries when they
    /// are added.
    pub fn new(
        sequence: u64,
        doc_id: impl Into<String>,
        rev_id: impl Into<String>,
        flags: EntryFlags,
    ) -> Self {
        Self {
            sequence,
            doc_id: doc_id.into(),
            rev_id: rev_id.into(),
            flags,
        }
    }

    /// Check that the entry may be admitted to a change log
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in the order: zero sequence, empty
    /// document ID, empty revision ID, out-of-range flags.
    pub fn validate(&self) -> ChangeLogResult<()> {
        if self.sequence == 0 {
            return Err(ChangeLogError::ZeroSequence {
                doc_id: self.doc_id.clone(),
                rev_id: self.rev_id.clone(),
            });
        }
        if self.doc_id.is_empty() {
            return Err(ChangeLogError::EmptyDocId {
                sequence: self.sequence,
            });
        }
        if self.rev_id.is_empty() {
            return Err(ChangeLogError::EmptyRevId {
                sequence: self.sequence,
                doc_id: self.doc_id.clone(),
            });
        }
        if !self.flags.is_in_range() {
            return Err(ChangeLogError::InvalidFlags {
                sequence: self.sequence,
                bits: self.flags.bits(),
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(EntryFlags::DELETED)
    }

    pub fn is_removed(&self) -> bool {
        self.flags.contains(EntryFlags::REMOVED)
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(EntryFlags::HIDDEN)
    }
}
