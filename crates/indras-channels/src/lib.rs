//! # Indras Channels
//!
//! Per-channel change logs for Indras Network change feeds.
//!
//! Each channel keeps a bounded [`ChangeLog`] of the document revisions
//! added to it. The feed layer asks the log for everything added after a
//! subscriber's last-seen sequence instead of rescanning full history.
//!
//! ## Key Types
//!
//! - [`LogEntry`]: A revision event (sequence, document, revision, flags)
//! - [`EntryFlags`]: Deleted/removed/hidden bits on an entry
//! - [`ChangeLog`]: Insertion-ordered log with a `since` watermark
//! - [`RetentionConfig`]: How many entries a channel log keeps
//!
//! ## Ordering
//!
//! Entries are kept in the order they were added, which is not always
//! sequence order. Delta queries are positional: "after sequence S" means
//! "added after the entry with sequence S". Call [`ChangeLog::sort`] to switch
//! to sequence order.
//!
//! ## Example
//!
//! ```rust
//! use indras_channels::{ChangeLog, EntryFlags, LogEntry, RetentionConfig};
//!
//! let mut log = ChangeLog::new();
//! log.add(LogEntry::new(1, "docA", "1-a", EntryFlags::empty())).unwrap();
//! log.add(LogEntry::new(2, "docB", "1-b", EntryFlags::empty())).unwrap();
//! log.add(LogEntry::new(3, "docA", "2-c", EntryFlags::DELETED)).unwrap();
//!
//! // A subscriber that has seen sequence 1 needs the last two entries
//! let delta = log.entries_after(1);
//! assert_eq!(delta.len(), 2);
//!
//! // Bound memory; the watermark covers what was dropped
//! let removed = log.apply_retention(&RetentionConfig::new(1));
//! assert_eq!(removed, 2);
//! assert_eq!(log.since(), 2);
//! ```

pub mod change_log;
pub mod entry;
pub mod error;
pub mod retention;

// Re-exports
pub use change_log::ChangeLog;
pub use entry::{EntryFlags, LogEntry};
pub use error::{ChangeLogError, ChangeLogResult};
pub use retention::{DEFAULT_MAX_LENGTH, RetentionConfig, RetentionConfigBuilder};
