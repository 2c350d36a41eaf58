//! Wire layout of the splice commands.

use super::{BitWriter, Encodable, EncodingResult};
use crate::commands::{SpliceCommand, SpliceInsert, TimeSignal};

impl Encodable for SpliceCommand {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        match self {
            // splice_null carries no payload
            SpliceCommand::SpliceNull => Ok(()),
            SpliceCommand::SpliceInsert(insert) => insert.encode(writer),
            SpliceCommand::TimeSignal(time_signal) => time_signal.encode(writer),
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            SpliceCommand::SpliceNull => 0,
            SpliceCommand::SpliceInsert(insert) => insert.encoded_size(),
            SpliceCommand::TimeSignal(time_signal) => time_signal.encoded_size(),
        }
    }
}

impl Encodable for SpliceInsert {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        writer.write_bits(u64::from(self.event_id), 32)?;
        writer.write_bit(self.cancel)?;
        writer.write_bits(0x7F, 7)?;
        if self.cancel {
            return Ok(());
        }

        writer.write_bit(self.out_of_network)?;
        // program_splice_flag: this generator only signals program splices
        writer.write_bit(true)?;
        writer.write_bit(self.break_duration.is_some())?;
        writer.write_bit(self.splice_immediate)?;
        writer.write_bits(0x0F, 4)?;

        if !self.splice_immediate {
            if let Some(splice_time) = &self.splice_time {
                splice_time.encode(writer)?;
            }
        }
        if let Some(break_duration) = &self.break_duration {
            break_duration.encode(writer)?;
        }

        writer.write_bits(u64::from(self.unique_program_id), 16)?;
        writer.write_bits(u64::from(self.avail_num), 8)?;
        writer.write_bits(u64::from(self.avails_expected), 8)?;
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        // splice_event_id + cancel/reserved byte
        let mut size = 5;
        if self.cancel {
            return size;
        }
        size += 1;
        if !self.splice_immediate {
            if let Some(splice_time) = &self.splice_time {
                size += splice_time.encoded_size();
            }
        }
        if let Some(break_duration) = &self.break_duration {
            size += break_duration.encoded_size();
        }
        // unique_program_id + avail_num + avails_expected
        size + 4
    }
}

impl Encodable for TimeSignal {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        self.splice_time.encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.splice_time.encoded_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{BreakDuration, SpliceTime};

    fn insert() -> SpliceInsert {
        SpliceInsert {
            event_id: 0x1234,
            cancel: false,
            out_of_network: true,
            splice_immediate: true,
            splice_time: None,
            break_duration: None,
            unique_program_id: 7,
            avail_num: 0,
            avails_expected: 0,
        }
    }

    #[test]
    fn test_cancel_body_is_minimal() {
        let command = SpliceInsert {
            cancel: true,
            ..insert()
        };
        let buffer = command.encode_to_vec().unwrap();
        assert_eq!(buffer, vec![0x00, 0x00, 0x12, 0x34, 0xFF]);
    }

    #[test]
    fn test_immediate_insert_flags() {
        let buffer = insert().encode_to_vec().unwrap();
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer[4], 0x7F);
        // out_of_network, program_splice, no duration, splice_immediate
        assert_eq!(buffer[5], 0b1101_1111);
        assert_eq!(&buffer[6..8], &[0x00, 0x07]);
    }

    #[test]
    fn test_timed_insert_with_duration() {
        let command = SpliceInsert {
            splice_immediate: false,
            splice_time: Some(SpliceTime::from_ticks(0x100)),
            break_duration: Some(BreakDuration {
                auto_return: true,
                duration: 90_000,
            }),
            ..insert()
        };
        assert_eq!(command.encoded_size(), 20);
        let buffer = command.encode_to_vec().unwrap();
        assert_eq!(buffer.len(), 20);
        // out_of_network, program_splice, duration, not immediate
        assert_eq!(buffer[5], 0b1110_1111);
        assert_eq!(&buffer[6..11], &[0xFE, 0x00, 0x00, 0x01, 0x00]);
    }
}
