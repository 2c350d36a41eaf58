//! Binary encoding of SCTE-35 sections.
//!
//! The wire layer writes each structure with a bit-level writer so that
//! arbitrary-width fields (33-bit timestamps, 12-bit lengths) land at their
//! exact offsets, then seals the section with the MPEG-2 CRC-32 trailer.

pub mod error;
pub mod traits;
pub mod writer;

mod commands;
mod section;
mod time;


pub use error::{EncodingError, EncodingResult};
pub use traits::Encodable;
pub use writer::BitWriter;
