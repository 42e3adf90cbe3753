//! Per-channel change log
//!
//! A [`ChangeLog`] records the revisions added to one channel, in the order
//! they were added. That order is mostly, but not always, sequence order:
//! upstream producers may deliver sequences out of order. The log answers
//! "what was added after sequence S" for change feeds and keeps a watermark,
//! [`ChangeLog::since`], below which it makes no claims.
//!
//! ## Aliasing
//!
//! [`ChangeLog::entries_after`] borrows the log's storage. Any mutating call
//! (`add`, `truncate_to`, `filter_after`, `sort`) needs `&mut self`, so a
//! borrowed delta must be dropped first. Use
//! [`ChangeLog::entries_after_owned`] to hand a delta to another task.
//!
//! ## Concurrency
//!
//! The log does no locking. An embedding that shares one log between
//! threads must serialize access itself, e.g. behind a mutex owned by the
//! channel registry.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::entry::LogEntry;
use crate::error::ChangeLogResult;
use crate::retention::RetentionConfig;

/// Insertion-ordered log of revisions added to a channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeLog {
    /// Max sequence guaranteed not to be in the log; the log is valid after it
    since: u64,
    /// Entries in the order they were added (not sequence order!)
    entries: Vec<LogEntry>,
}

impl ChangeLog {
    /// Create a new, empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence this log is valid after
    pub fn since(&self) -> u64 {
        self.since
    }

    /// All entries, in the order they were added
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry at the end of the log
    ///
    /// If the log is empty, or the entry's sequence equals the current
    /// watermark, the watermark becomes `sequence - 1`. Out-of-order entries
    /// otherwise leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails [`LogEntry::validate`]. The log is
    /// not modified in that case.
    pub fn add(&mut self, entry: LogEntry) -> ChangeLogResult<()> {
        if let Err(err) = entry.validate() {
            warn!(error = %err, "Rejected change log entry");
            return Err(err);
        }

        if self.entries.is_empty() || entry.sequence == self.since {
            self.since = entry.sequence - 1;
        }

        trace!(
            sequence = entry.sequence,
            doc_id = %entry.doc_id,
            rev_id = %entry.rev_id,
            since = self.since,
            "Added change log entry"
        );

        self.entries.push(entry);
        Ok(())
    }

    /// Remove the oldest entries so that at most `max_length` remain
    ///
    /// The watermark is raised to the highest sequence among the removed
    /// entries, which is not necessarily the last one removed. Returns the
    /// number of entries removed.
    pub fn truncate_to(&mut self, max_length: usize) -> usize {
        let remove = self.entries.len().saturating_sub(max_length);
        if remove == 0 {
            return 0;
        }

        if let Some(max_removed) = self.entries[..remove].iter().map(|e| e.sequence).max() {
            self.since = self.since.max(max_removed);
        }
        self.entries.drain(..remove);

        debug!(
            removed = remove,
            remaining = self.entries.len(),
            since = self.since,
            "Truncated change log"
        );

        remove
    }

    /// Apply a retention config, returning the number of entries removed
    pub fn apply_retention(&mut self, config: &RetentionConfig) -> usize {
        self.truncate_to(config.max_length())
    }

    /// Entries added after the one with sequence `after`
    ///
    /// The entry is found by scanning in log order; the first match wins.
    /// Later entries are not guaranteed to have higher sequences. If no entry
    /// has sequence `after`, the whole log is returned.
    pub fn entries_after(&self, after: u64) -> &[LogEntry] {
        match self.position_of(after) {
            Some(index) => &self.entries[index + 1..],
            None => &self.entries,
        }
    }

    /// Owned copy of [`Self::entries_after`]
    pub fn entries_after_owned(&self, after: u64) -> Vec<LogEntry> {
        self.entries_after(after).to_vec()
    }

    /// Drop everything up to and including the entry with sequence `after`
    ///
    /// Equivalent to replacing the entries with [`Self::entries_after`] and
    /// raising the watermark to `after`. The watermark is never lowered.
    pub fn filter_after(&mut self, after: u64) {
        let removed = match self.position_of(after) {
            Some(index) => self.entries.drain(..=index).count(),
            None => 0,
        };

        if after > self.since {
            self.since = after;
        }

        debug!(
            after,
            removed,
            remaining = self.entries.len(),
            since = self.since,
            "Filtered change log"
        );
    }

    /// Reorder entries by increasing sequence
    ///
    /// The sort is stable, so equal sequences keep the order they were added
    /// in. After sorting, [`Self::entries_after`] works on sequence positions
    /// rather than insertion positions. The log does not remember that it was
    /// sorted.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|entry| entry.sequence);
        trace!(entries = self.entries.len(), "Sorted change log");
    }

    fn position_of(&self, sequence: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.sequence == sequence)
    }
}
