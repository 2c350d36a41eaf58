//! Input boundary: splice records handed over by the upstream cue source.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Splice command tag carried by an input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpliceCommandType {
    SpliceNull,
    SpliceInsert,
    TimeSignal,
    /// Any other command value; the buffered event is discarded at flush.
    Reserved(u8),
}

impl SpliceCommandType {
    /// The on-wire splice_command_type value.
    pub fn value(&self) -> u8 {
        match self {
            SpliceCommandType::SpliceNull => 0x00,
            SpliceCommandType::SpliceInsert => 0x05,
            SpliceCommandType::TimeSignal => 0x06,
            SpliceCommandType::Reserved(value) => *value,
        }
    }
}

impl From<u8> for SpliceCommandType {
    fn from(value: u8) -> Self {
        match value {
            0x00 => SpliceCommandType::SpliceNull,
            0x05 => SpliceCommandType::SpliceInsert,
            0x06 => SpliceCommandType::TimeSignal,
            other => SpliceCommandType::Reserved(other),
        }
    }
}

/// One attribute fragment of a pending splice event.
///
/// A complete event is described by one or more records delimited by the
/// `start` and `end` markers; ownership transfers into the generator, which
/// releases the records once the event is encoded or discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SpliceRecord {
    pub command: Option<SpliceCommandType>,
    /// Program-relative presentation time of the splice point, in 27 MHz
    /// ticks. Absent for splice-immediate events.
    pub pts_prog: Option<u64>,
    /// System date after which the event is obsolete, in 27 MHz ticks.
    pub pts_sys: Option<u64>,
    /// Break duration in 27 MHz ticks.
    pub duration: Option<u64>,
    pub cancel: bool,
    pub auto_return: bool,
    pub out_of_network: bool,
    pub event_id: u32,
    pub unique_program_id: u16,
    /// First record of an event description.
    pub start: bool,
    /// Last record of an event description.
    pub end: bool,
    /// Clear marker: drops pending delayed sections without an end event.
    pub empty: bool,
}

impl SpliceRecord {
    /// The explicit clear signal, carrying no event attributes.
    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_type_values() {
        assert_eq!(SpliceCommandType::SpliceNull.value(), 0x00);
        assert_eq!(SpliceCommandType::SpliceInsert.value(), 0x05);
        assert_eq!(SpliceCommandType::TimeSignal.value(), 0x06);
        assert_eq!(SpliceCommandType::from(0x07), SpliceCommandType::Reserved(0x07));
        assert_eq!(SpliceCommandType::from(0x05), SpliceCommandType::SpliceInsert);
    }

    #[test]
    fn test_empty_record_is_clear_marker() {
        let record = SpliceRecord::empty();
        assert!(record.empty);
        assert!(record.command.is_none());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_record_round_trips_through_json() {
        let record = SpliceRecord {
            command: Some(SpliceCommandType::SpliceInsert),
            pts_prog: Some(27_000_000),
            event_id: 42,
            out_of_network: true,
            start: true,
            end: true,
            ..SpliceRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SpliceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_fields_default_when_absent() {
        let record: SpliceRecord = serde_json::from_str("{\"event_id\": 7}").unwrap();
        assert_eq!(record.event_id, 7);
        assert!(record.command.is_none());
        assert!(!record.start);
    }
}
