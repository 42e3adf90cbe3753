//! Property tests for ChangeLog
//!
//! Random append sequences (including duplicates and out-of-order
//! sequences) checked against the ordering and watermark rules.

use indras_channels::{ChangeLog, EntryFlags, LogEntry};
use proptest::prelude::*;

fn entry(sequence: u64, flags: u8) -> LogEntry {
    LogEntry::new(
        sequence,
        format!("doc{}", sequence % 17),
        format!("1-{:x}", sequence),
        EntryFlags::from_raw(flags),
    )
}

fn build(sequences: &[u64]) -> ChangeLog {
    let mut log = ChangeLog::new();
    for &s in sequences {
        log.add(entry(s, 0)).unwrap();
    }
    log
}

fn seqs(entries: &[LogEntry]) -> Vec<u64> {
    entries.iter().map(|e| e.sequence).collect()
}

fn sequences() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..64, 0..40)
}

proptest! {
    #[test]
    fn add_appends_at_tail(prefix in sequences(), next in 1u64..64) {
        let mut log = build(&prefix);
        let before = seqs(log.entries());

        log.add(entry(next, 0)).unwrap();

        let after = seqs(log.entries());
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(log.entries().last().map(|e| e.sequence), Some(next));
    }

    #[test]
    fn add_watermark_rule(prefix in sequences(), next in 1u64..64) {
        let mut log = build(&prefix);
        let since = log.since();
        let was_empty = log.is_empty();

        log.add(entry(next, 0)).unwrap();

        if was_empty || next == since {
            prop_assert_eq!(log.since(), next - 1);
        } else {
            prop_assert_eq!(log.since(), since);
        }
    }

    #[test]
    fn invalid_add_leaves_log_untouched(
        prefix in sequences(),
        sequence in 0u64..64,
        flags in any::<u8>(),
        empty_doc in any::<bool>(),
        empty_rev in any::<bool>(),
    ) {
        prop_assume!(sequence == 0 || flags > EntryFlags::MAX || empty_doc || empty_rev);

        let mut log = build(&prefix);
        let before = log.clone();

        let doc_id = if empty_doc { String::new() } else { "docX".to_string() };
        let rev_id = if empty_rev { String::new() } else { "1-x".to_string() };
        let bad = LogEntry::new(sequence, doc_id, rev_id, EntryFlags::from_raw(flags));

        prop_assert!(log.add(bad).is_err());
        prop_assert_eq!(log, before);
    }

    #[test]
    fn truncate_bounds_length(input in sequences(), max_length in 0usize..50) {
        let mut log = build(&input);
        let len = log.len();
        let since = log.since();

        let removed = log.truncate_to(max_length);

        prop_assert!(log.len() <= max_length);
        prop_assert!(log.since() >= since);
        prop_assert_eq!(removed, len.saturating_sub(max_length));
        if len <= max_length {
            prop_assert_eq!(removed, 0);
        }
        // Every dropped sequence is covered by the watermark
        for s in &input[..removed] {
            prop_assert!(*s <= log.since());
        }
    }

    #[test]
    fn entries_after_is_positional(input in sequences(), after in 0u64..64) {
        let log = build(&input);
        let got = seqs(log.entries_after(after));

        let expected = match input.iter().position(|&s| s == after) {
            Some(i) => input[i + 1..].to_vec(),
            None => input.clone(),
        };
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn filter_after_matches_entries_after(input in sequences(), after in 0u64..64) {
        let mut log = build(&input);
        let expected_entries = log.entries_after_owned(after);
        let expected_since = log.since().max(after);

        log.filter_after(after);

        prop_assert_eq!(log.entries(), &expected_entries[..]);
        prop_assert_eq!(log.since(), expected_since);
    }

    #[test]
    fn sort_is_ordered_and_idempotent(input in sequences()) {
        let mut log = build(&input);
        log.sort();
        prop_assert!(log.entries().windows(2).all(|w| w[0].sequence <= w[1].sequence));

        let once = log.clone();
        log.sort();
        prop_assert_eq!(log, once);
    }
}
