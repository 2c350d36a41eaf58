//! SCTE-35 Splice Information Table generation for MPEG-TS multiplexing.
//!
//! This crate turns abstract splice event records into binary SCTE-35
//! sections (splice_insert, time_signal and splice_null commands) and
//! releases them to a downstream multiplexer at the cadence the cueing
//! protocol requires. Records are aggregated into events, each event is
//! encoded into a delayed section (carrying the concrete splice time) and
//! an immediate fallback section, and a per-tick scheduler picks exactly
//! one section to emit, falling back to a cached splice_null heartbeat.
//!
//! Normative references:
//!  - ISO/IEC 13818-1:2007(E) (MPEG-2 Systems)
//!  - SCTE 35 2013 (Digital Program Insertion Cueing Message for Cable)
//!
//! ```
//! use scte35gen::{
//!     CLOCK_FREQ, OutputFlowDef, OutputSection, Scte35Generator, SectionSink,
//!     SpliceCommandType, SpliceRecord,
//! };
//!
//! struct Collect(Vec<OutputSection>);
//!
//! impl SectionSink for Collect {
//!     fn flow_def(&mut self, _flow_def: OutputFlowDef) {}
//!     fn section(&mut self, section: OutputSection) {
//!         self.0.push(section);
//!     }
//! }
//!
//! # fn main() -> scte35gen::Result<()> {
//! let mut generator = Scte35Generator::new(Collect(Vec::new()));
//! generator.set_flow_def("void.scte35.")?;
//! generator.set_interval(CLOCK_FREQ);
//! generator.input(SpliceRecord {
//!     command: Some(SpliceCommandType::SpliceInsert),
//!     event_id: 1,
//!     start: true,
//!     end: true,
//!     ..SpliceRecord::default()
//! })?;
//! generator.prepare(10 * CLOCK_FREQ, 0)?;
//! assert_eq!(generator.output().0.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod commands;
pub mod crc;
pub mod descriptors;
pub mod encoding;
mod error;
pub mod flow;
pub mod generator;
pub mod queue;
pub mod reassembly;
pub mod record;
pub mod section;
pub mod sink;
pub mod time;

pub use descriptors::ExportDescriptor;
pub use error::{GeneratorError, Result};
pub use flow::OutputFlowDef;
pub use generator::{ControlRequest, ControlResponse, Scte35Generator};
pub use record::{SpliceCommandType, SpliceRecord};
pub use sink::{OutputSection, SectionSink};

/// Internal clock frequency of the pipeline, in ticks per second (27 MHz).
pub const CLOCK_FREQ: u64 = 27_000_000;

/// Native tick rate of SCTE-35 time fields (90 kHz).
pub const MPEG_FREQ: u64 = 90_000;

/// Ratio between the internal clock and the 90 kHz MPEG clock.
pub const CLOCK_SCALE: u64 = CLOCK_FREQ / MPEG_FREQ;

/// 2^33 (max resolution of PCR, PTS and DTS).
pub const POW2_33: u64 = 1 << 33;

/// Conversion from internal clock ticks to the protocol's 90 kHz domain.
pub trait ClockTimeExt {
    /// Returns the value scaled to 90 kHz, wrapped to 33 bits.
    fn as_90k(&self) -> u64;
}

impl ClockTimeExt for u64 {
    fn as_90k(&self) -> u64 {
        (self / CLOCK_SCALE) % POW2_33
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_scale() {
        assert_eq!(CLOCK_SCALE, 300);
        assert_eq!(CLOCK_FREQ.as_90k(), 90_000);
    }

    #[test]
    fn test_as_90k_wraps_to_33_bits() {
        let ticks = (POW2_33 + 5) * CLOCK_SCALE;
        assert_eq!(ticks.as_90k(), 5);
    }
}
