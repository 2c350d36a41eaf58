//! Wire layout of the splice_time() and break_duration() structures.

use super::{BitWriter, Encodable, EncodingResult};
use crate::time::{BreakDuration, SpliceTime};

impl Encodable for SpliceTime {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        match self.pts_time {
            Some(pts_time) => {
                // time_specified_flag, 6 reserved bits, 33-bit pts_time
                writer.write_bit(true)?;
                writer.write_bits(0x3F, 6)?;
                writer.write_bits(pts_time & 0x1_FFFF_FFFF, 33)?;
            }
            None => {
                // time_specified_flag, 7 reserved bits
                writer.write_bit(false)?;
                writer.write_bits(0x7F, 7)?;
            }
        }
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        if self.pts_time.is_some() { 5 } else { 1 }
    }
}

impl Encodable for BreakDuration {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        // auto_return, 6 reserved bits, 33-bit duration
        writer.write_bit(self.auto_return)?;
        writer.write_bits(0x3F, 6)?;
        writer.write_bits(self.duration & 0x1_FFFF_FFFF, 33)?;
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_time_with_pts() {
        let buffer = SpliceTime::from_ticks(0x0_4A56_25E9).encode_to_vec().unwrap();
        assert_eq!(buffer, vec![0xFE, 0x4A, 0x56, 0x25, 0xE9]);
    }

    #[test]
    fn test_splice_time_not_specified() {
        let buffer = SpliceTime::none().encode_to_vec().unwrap();
        assert_eq!(buffer, vec![0x7F]);
    }

    #[test]
    fn test_break_duration_with_auto_return() {
        let break_duration = BreakDuration {
            auto_return: true,
            duration: 0x0_00A4_CB80,
        };
        let buffer = break_duration.encode_to_vec().unwrap();
        assert_eq!(buffer, vec![0xFE, 0x00, 0xA4, 0xCB, 0x80]);
    }
}
