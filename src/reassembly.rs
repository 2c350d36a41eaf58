//! Event reassembly: groups loosely-ordered records into one event.

use std::mem;

use tracing::{trace, warn};

use crate::record::SpliceRecord;

/// Collects the records describing the event currently being assembled.
///
/// The reassembler is idle while its buffer is empty and collecting
/// otherwise. A start-marked record arriving mid-collection force-flushes
/// the previous event; an end-marked record, or a lone record with no
/// markers, completes one.
#[derive(Debug, Default)]
pub struct Reassembler {
    records: Vec<SpliceRecord>,
}

impl Reassembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collecting(&self) -> bool {
        !self.records.is_empty()
    }

    /// Buffers `record` and returns every event description it completes,
    /// in order. At most two: a force-flushed previous event and the new
    /// record's own event when it is already complete.
    pub fn push(&mut self, record: SpliceRecord) -> Vec<Vec<SpliceRecord>> {
        let mut completed = Vec::new();
        let mut was_empty = self.records.is_empty();
        if record.start && !was_empty {
            warn!("force last event flush");
            completed.push(mem::take(&mut self.records));
            was_empty = true;
        }

        let start = record.start;
        let end = record.end;
        self.records.push(record);
        if (!was_empty || start) && !end {
            trace!("waiting for the next descriptor");
            return completed;
        }

        completed.push(mem::take(&mut self.records));
        completed
    }

    /// Drops any partially collected event.
    pub fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: bool, end: bool) -> SpliceRecord {
        SpliceRecord {
            start,
            end,
            ..SpliceRecord::default()
        }
    }

    #[test]
    fn test_lone_unmarked_record_completes() {
        let mut reassembler = Reassembler::new();
        let completed = reassembler.push(record(false, false));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].len(), 1);
        assert!(!reassembler.is_collecting());
    }

    #[test]
    fn test_start_then_end_merge_into_one_event() {
        let mut reassembler = Reassembler::new();
        assert!(reassembler.push(record(true, false)).is_empty());
        assert!(reassembler.is_collecting());
        let completed = reassembler.push(record(false, true));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].len(), 2);
        assert!(!reassembler.is_collecting());
    }

    #[test]
    fn test_start_and_end_on_one_record() {
        let mut reassembler = Reassembler::new();
        let completed = reassembler.push(record(true, true));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].len(), 1);
    }

    #[test]
    fn test_new_start_force_flushes_previous_event() {
        let mut reassembler = Reassembler::new();
        assert!(reassembler.push(record(true, false)).is_empty());
        let completed = reassembler.push(record(true, true));
        assert_eq!(completed.len(), 2);
        assert_eq!(completed[0].len(), 1);
        assert_eq!(completed[1].len(), 1);
        assert!(!reassembler.is_collecting());
    }

    #[test]
    fn test_reset_drops_partial_event() {
        let mut reassembler = Reassembler::new();
        reassembler.push(record(true, false));
        reassembler.reset();
        assert!(!reassembler.is_collecting());
        // the next unmarked record completes on its own again
        assert_eq!(reassembler.push(record(false, false)).len(), 1);
    }
}
