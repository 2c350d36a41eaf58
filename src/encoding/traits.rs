//! Trait seam for encodable wire structures.

use super::error::EncodingResult;
use super::writer::BitWriter;

/// Types with a fixed SCTE-35 wire representation.
pub trait Encodable {
    /// Appends the structure's bit fields to `writer`.
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()>;

    /// Exact number of bytes `encode` will produce.
    ///
    /// Used to pre-size buffers and to fill in the length fields that
    /// precede the structure on the wire.
    fn encoded_size(&self) -> usize;

    /// Encodes into a fresh byte vector.
    fn encode_to_vec(&self) -> EncodingResult<Vec<u8>> {
        let mut writer = BitWriter::with_capacity(self.encoded_size());
        self.encode(&mut writer)?;
        Ok(writer.finish())
    }
}
