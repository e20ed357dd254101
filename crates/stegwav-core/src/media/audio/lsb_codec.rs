use std::io::{self, Read, Write};
use std::slice::{Iter, IterMut};

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{BigEndian as BigEndianBytes, ByteOrder};
use log::debug;

use crate::error::FormatProblem;
use crate::media::payload::LENGTH_HEADER_LEN;
use crate::result::Result;
use crate::SteganoError;

/// Factory for decoder and encoder, and the two framed stream operations built on top.
///
/// One hidden bit occupies the least significant bit of one sample byte. Bits are taken
/// most significant first and sample bytes are visited strictly in order.
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that implements Read
    pub fn decoder(input: &[u8]) -> LsbDecoder<'_> {
        LsbDecoder {
            samples: input.iter(),
        }
    }

    /// builds a LSB Audio Encoder that implements Write
    pub fn encoder(input: &mut [u8]) -> LsbEncoder<'_> {
        LsbEncoder {
            samples: input.iter_mut(),
        }
    }

    /// Hides the framed stream in a copy of the carrier sample bytes.
    ///
    /// Fails before touching anything if the carrier has fewer sample bytes than the
    /// stream has bits.
    pub fn embed(carrier: &[u8], framed: &[u8]) -> Result<Vec<u8>> {
        let required = framed
            .len()
            .checked_mul(8)
            .ok_or(SteganoError::PayloadTooLarge(framed.len()))?;
        if required > carrier.len() {
            return Err(SteganoError::CapacityError {
                required,
                available: carrier.len(),
            });
        }
        debug!(
            "hiding {} bytes in {} of {} sample bytes",
            framed.len(),
            required,
            carrier.len()
        );

        let mut stego = carrier.to_vec();
        LsbCodec::encoder(&mut stego).write_all(framed)?;

        Ok(stego)
    }

    /// Reads the length header and the announced number of bytes back out of the carrier.
    ///
    /// The returned stream still starts with its length header.
    pub fn extract(stego: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = LsbCodec::decoder(stego);

        let mut framed = vec![0u8; LENGTH_HEADER_LEN];
        decoder
            .read_exact(&mut framed)
            .map_err(|_| SteganoError::FormatError(FormatProblem::CarrierTooShort))?;

        let len = BigEndianBytes::read_u32(&framed) as usize;
        if len > decoder.remaining_bytes() {
            debug!(
                "declared payload of {len} bytes, but only {} fit into the carrier",
                decoder.remaining_bytes()
            );
            return Err(SteganoError::FormatError(FormatProblem::Truncated));
        }

        framed.resize(LENGTH_HEADER_LEN + len, 0);
        decoder.read_exact(&mut framed[LENGTH_HEADER_LEN..])?;

        Ok(framed)
    }
}

/// Writes each bit of the given bytes into the LSB of the next sample byte
pub struct LsbEncoder<'i> {
    samples: IterMut<'i, u8>,
}

impl LsbEncoder<'_> {
    /// number of whole bytes that can still be hidden
    pub fn remaining_bytes(&self) -> usize {
        self.samples.len() / 8
    }
}

impl Write for LsbEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let fitting = buf.len().min(self.remaining_bytes());
        let mut bits = BitReader::endian(&buf[..fitting], BigEndian);

        for sample in self.samples.by_ref().take(fitting << 3) {
            let bit = bits.read_bit()?;
            *sample = (*sample & !1) | u8::from(bit);
        }

        Ok(fitting)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects the LSB of every sample byte, 8 of them make one byte
pub struct LsbDecoder<'i> {
    samples: Iter<'i, u8>,
}

impl LsbDecoder<'_> {
    /// number of whole bytes that can still be read
    pub fn remaining_bytes(&self) -> usize {
        self.samples.len() / 8
    }
}

impl Read for LsbDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let fitting = buf.len().min(self.remaining_bytes());
        let mut bits = BitWriter::endian(&mut buf[..fitting], BigEndian);

        for sample in self.samples.by_ref().take(fitting << 3) {
            bits.write_bit(sample & 1 == 1)?;
        }

        Ok(fitting)
    }
}
