//! Wire layout of the complete splice information section.

use super::{BitWriter, Encodable, EncodingError, EncodingResult};
use crate::crc::calculate_crc;
use crate::section::{CRC_SIZE, MAX_SECTION_SIZE, SECTION_HEADER_SIZE, SpliceInfoSection, TABLE_ID};

impl SpliceInfoSection {
    /// Total size of the encoded section, CRC trailer included.
    pub fn encoded_size(&self) -> usize {
        // fixed header, table_id through splice_command_type
        14 + self.splice_command.encoded_size()
            + 2
            + self.descriptor_loop_length()
            + CRC_SIZE
    }

    fn descriptor_loop_length(&self) -> usize {
        self.descriptors.iter().map(Vec::len).sum()
    }

    fn encode_without_crc(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        let section_length = self.encoded_size() - SECTION_HEADER_SIZE;

        writer.write_bits(u64::from(TABLE_ID), 8)?;
        // section_syntax_indicator, private_indicator, 2 reserved bits
        writer.write_bit(false)?;
        writer.write_bit(false)?;
        writer.write_bits(0b11, 2)?;
        writer.write_bits(section_length as u64, 12)?;
        // protocol_version
        writer.write_bits(0, 8)?;
        // encrypted_packet, encryption_algorithm
        writer.write_bit(false)?;
        writer.write_bits(0, 6)?;
        writer.write_bits(self.pts_adjustment & 0x1_FFFF_FFFF, 33)?;
        writer.write_bits(u64::from(self.cw_index), 8)?;
        writer.write_bits(u64::from(self.tier) & 0xFFF, 12)?;
        writer.write_bits(self.splice_command.encoded_size() as u64, 12)?;
        writer.write_bits(u64::from(self.splice_command.command_type()), 8)?;
        self.splice_command.encode(writer)?;
        writer.write_bits(self.descriptor_loop_length() as u64, 16)?;
        for descriptor in &self.descriptors {
            writer.write_bytes(descriptor)?;
        }
        Ok(())
    }

    /// Encodes the section and seals it with its CRC-32 trailer.
    pub fn encode_with_crc(&self) -> EncodingResult<Vec<u8>> {
        let size = self.encoded_size();
        if size > MAX_SECTION_SIZE {
            return Err(EncodingError::SectionOverflow {
                needed: size,
                available: MAX_SECTION_SIZE,
            });
        }

        let mut writer = BitWriter::with_capacity(size);
        self.encode_without_crc(&mut writer)?;
        let mut buffer = writer.finish();
        let crc = calculate_crc(&buffer);
        buffer.extend_from_slice(&crc.to_be_bytes());
        debug_assert_eq!(buffer.len(), size);
        Ok(buffer)
    }
}
