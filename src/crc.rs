//! MPEG-2 CRC-32 for section trailers.

use std::io::{self, ErrorKind};

use crc::{CRC_32_MPEG_2, Crc};

/// MPEG-2 CRC-32 algorithm instance used by all SCTE-35 sections.
pub const MPEG_2: Crc<u32> = Crc::<u32>::new(&CRC_32_MPEG_2);

/// Calculates the CRC-32 over `data` (everything before the trailer).
pub fn calculate_crc(data: &[u8]) -> u32 {
    MPEG_2.checksum(data)
}

/// Checks `data` against an expected trailer value.
pub fn validate_crc(data: &[u8], expected_crc: u32) -> bool {
    MPEG_2.checksum(data) == expected_crc
}

/// Validates the CRC-32 trailer of a complete section.
///
/// The trailer is the last 4 bytes of `buffer`, big-endian, covering every
/// preceding byte.
pub fn validate_message_crc(buffer: &[u8]) -> Result<bool, io::Error> {
    if buffer.len() < 4 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "buffer too short to contain a CRC-32 field",
        ));
    }

    let (data, trailer) = buffer.split_at(buffer.len() - 4);
    let stored_crc = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    Ok(validate_crc(data, stored_crc))
}
