//! Flow definitions negotiated with the surrounding pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CLOCK_FREQ;

/// Flow definition prefix accepted on the input side.
pub const INPUT_FLOW_DEF: &str = "void.scte35.";

/// Flow definition published downstream.
pub const OUTPUT_FLOW_DEF: &str = "block.mpegtspsi.mpegtsscte35.";

/// T-STD TB octet rate for PSI tables.
pub const TB_RATE_PSI: u64 = 125_000;

/// Transport stream packet size.
pub const TS_SIZE: u64 = 188;

/// Transport stream packet header size.
pub const TS_HEADER_SIZE: u64 = 4;

/// Downstream metadata describing the section stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputFlowDef {
    /// Format identity of the output.
    pub def: String,
    /// Interval between sections, in 27 MHz ticks.
    pub section_interval: u64,
    /// Nominal octet rate of the section stream.
    pub octetrate: u64,
    /// Leaky-bucket rate for signaling tables.
    pub tb_rate: u64,
}

/// Derives the output flow definition for `interval`, or `None` while no
/// interval is configured.
pub fn build_output_flow_def(interval: u64) -> Option<OutputFlowDef> {
    if interval == 0 {
        return None;
    }
    Some(OutputFlowDef {
        def: OUTPUT_FLOW_DEF.to_owned(),
        section_interval: interval,
        octetrate: (TS_SIZE - TS_HEADER_SIZE - 1) * CLOCK_FREQ / interval,
        tb_rate: TB_RATE_PSI,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_yields_nothing() {
        assert!(build_output_flow_def(0).is_none());
    }

    #[test]
    fn test_octetrate_for_one_second_interval() {
        let flow_def = build_output_flow_def(CLOCK_FREQ).unwrap();
        assert_eq!(flow_def.def, OUTPUT_FLOW_DEF);
        assert_eq!(flow_def.section_interval, CLOCK_FREQ);
        // one 183-octet payload per second
        assert_eq!(flow_def.octetrate, 183);
        assert_eq!(flow_def.tb_rate, TB_RATE_PSI);
    }
}
