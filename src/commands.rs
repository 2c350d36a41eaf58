//! Generation-side model of the SCTE-35 splice commands.
//!
//! Only the commands this generator emits are modelled: splice_null (0x00),
//! splice_insert (0x05) and time_signal (0x06). All splices are
//! program-level, so splice_insert carries no component loop.

use crate::time::{BreakDuration, SpliceTime};

/// A splice command together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceCommand {
    /// Null command (0x00), the heartbeat filler.
    SpliceNull,
    /// Splice insert command (0x05), the ad insertion point.
    SpliceInsert(SpliceInsert),
    /// Time signal command (0x06), a timestamped marker with descriptors.
    TimeSignal(TimeSignal),
}

impl SpliceCommand {
    /// The splice_command_type value written in the section header.
    pub fn command_type(&self) -> u8 {
        match self {
            SpliceCommand::SpliceNull => 0x00,
            SpliceCommand::SpliceInsert(_) => 0x05,
            SpliceCommand::TimeSignal(_) => 0x06,
        }
    }
}

/// A program-level splice_insert command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceInsert {
    pub event_id: u32,
    /// Cancels a previously signalled event; the body shrinks to the
    /// cancel-only form.
    pub cancel: bool,
    pub out_of_network: bool,
    /// Splice at the moment the section arrives instead of at a PTS.
    pub splice_immediate: bool,
    /// Splice point; only encoded when not splicing immediately.
    pub splice_time: Option<SpliceTime>,
    pub break_duration: Option<BreakDuration>,
    pub unique_program_id: u16,
    pub avail_num: u8,
    pub avails_expected: u8,
}

/// A time_signal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSignal {
    pub splice_time: SpliceTime,
}
