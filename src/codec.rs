//! Section codec: one logical splice event in, canonical section buffers out.
//!
//! Events carrying a concrete splice time are encoded twice: a delayed
//! section with the time field set, and an immediate fallback used when the
//! delayed window expires unsent. Untimed events only get the immediate
//! form. Timestamps and durations are scaled from the 27 MHz internal clock
//! to the protocol's 90 kHz domain independently of each other.

use crate::ClockTimeExt;
use crate::commands::{SpliceCommand, SpliceInsert, TimeSignal};
use crate::encoding::EncodingResult;
use crate::record::SpliceRecord;
use crate::section::SpliceInfoSection;
use crate::time::{BreakDuration, SpliceTime};

/// Delayed and immediate serializations of one splice event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPair {
    /// Section carrying the concrete splice time; absent for untimed events.
    pub delayed: Option<Vec<u8>>,
    /// Fallback section with splice-immediate semantics.
    pub immediate: Vec<u8>,
}

/// Encodes a splice_insert event.
pub fn encode_insert(record: &SpliceRecord) -> EncodingResult<SectionPair> {
    let delayed = match record.pts_prog {
        Some(pts_prog) => Some(insert_section(record, Some(pts_prog))?),
        None => None,
    };
    Ok(SectionPair {
        delayed,
        immediate: insert_section(record, None)?,
    })
}

fn insert_section(record: &SpliceRecord, pts_prog: Option<u64>) -> EncodingResult<Vec<u8>> {
    let insert = SpliceInsert {
        event_id: record.event_id,
        cancel: record.cancel,
        out_of_network: record.out_of_network,
        splice_immediate: pts_prog.is_none(),
        splice_time: pts_prog.map(|pts_prog| SpliceTime::from_ticks(pts_prog.as_90k())),
        break_duration: record.duration.map(|duration| BreakDuration {
            auto_return: record.auto_return,
            duration: duration.as_90k(),
        }),
        unique_program_id: record.unique_program_id,
        avail_num: 0,
        avails_expected: 0,
    };
    SpliceInfoSection::new(SpliceCommand::SpliceInsert(insert)).encode_with_crc()
}

/// Encodes a time_signal event with its already-exported descriptor loop.
pub fn encode_time_signal(
    record: &SpliceRecord,
    descriptors: &[Vec<u8>],
) -> EncodingResult<SectionPair> {
    let delayed = match record.pts_prog {
        Some(pts_prog) => Some(time_signal_section(Some(pts_prog), descriptors)?),
        None => None,
    };
    Ok(SectionPair {
        delayed,
        immediate: time_signal_section(None, descriptors)?,
    })
}

fn time_signal_section(pts_prog: Option<u64>, descriptors: &[Vec<u8>]) -> EncodingResult<Vec<u8>> {
    let splice_time = match pts_prog {
        Some(pts_prog) => SpliceTime::from_ticks(pts_prog.as_90k()),
        None => SpliceTime::none(),
    };
    SpliceInfoSection::new(SpliceCommand::TimeSignal(TimeSignal { splice_time }))
        .with_descriptors(descriptors.to_vec())
        .encode_with_crc()
}

/// Encodes the splice_null heartbeat section.
pub fn encode_null() -> EncodingResult<Vec<u8>> {
    SpliceInfoSection::new(SpliceCommand::SpliceNull).encode_with_crc()
}
