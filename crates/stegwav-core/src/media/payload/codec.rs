use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use crate::error::FormatProblem;
use crate::result::Result;
use crate::SteganoError;

/// Size of the big endian `u32` that precedes every embedded payload
pub const LENGTH_HEADER_LEN: usize = 4;

/// prepends the payload length as 4 byte big endian header
pub fn frame(payload: &[u8]) -> Result<Vec<u8>> {
    let len = length_header(payload.len())?;

    let mut buffer = Vec::with_capacity(payload.len() + LENGTH_HEADER_LEN);
    buffer.write_u32::<BigEndian>(len)?;
    buffer.extend_from_slice(payload);

    Ok(buffer)
}

/// strips the length header and returns exactly the announced number of payload bytes
pub fn unframe(framed: &[u8]) -> Result<&[u8]> {
    if framed.len() < LENGTH_HEADER_LEN {
        return Err(SteganoError::FormatError(FormatProblem::CarrierTooShort));
    }
    let (header, rest) = framed.split_at(LENGTH_HEADER_LEN);
    let len = BigEndian::read_u32(header) as usize;
    if len > rest.len() {
        return Err(SteganoError::FormatError(FormatProblem::Truncated));
    }

    Ok(&rest[..len])
}

fn length_header(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| SteganoError::PayloadTooLarge(len))
}
