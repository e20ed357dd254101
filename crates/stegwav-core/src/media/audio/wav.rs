use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::ops::Range;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
pub use hound::{SampleFormat, WavReader, WavSpec};
use log::{debug, error};

use super::LsbCodec;
use crate::media::payload::encoded_size;
use crate::media::Persist;
use crate::result::Result;
use crate::SteganoError;

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// A WAV file kept byte for byte, together with the location of its sample data.
///
/// Hiding only ever rewrites bytes inside the `data` chunk, everything else of the
/// container stays exactly as it was read.
#[derive(Debug, Clone)]
pub struct WavMedia {
    bytes: Vec<u8>,
    data: Range<usize>,
    spec: WavSpec,
}

impl WavMedia {
    pub fn from_file(f: &Path) -> Result<Self> {
        let is_wav = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("wav"))
            .unwrap_or(false);
        if !is_wav {
            return Err(SteganoError::UnsupportedMedia);
        }

        let mut bytes = Vec::new();
        File::open(f)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|source| SteganoError::ReadError { source })?;

        Self::from_bytes(bytes)
    }

    /// Accepts linear integer PCM only, float samples are rejected as unsupported.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let data = locate_sample_data(&bytes)?;

        let spec = WavReader::new(Cursor::new(&bytes[..]))
            .map_err(|e| {
                debug!("carrier rejected by the wav reader: {e}");
                SteganoError::InvalidAudioMedia
            })?
            .spec();
        if spec.sample_format != SampleFormat::Int {
            return Err(SteganoError::UnsupportedMedia);
        }
        debug!(
            "wav carrier with {} channel(s), {} bit, sample data at {}..{}",
            spec.channels, spec.bits_per_sample, data.start, data.end
        );

        Ok(Self { bytes, data, spec })
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// the raw sample bytes as they appear in the `data` chunk
    pub fn samples(&self) -> &[u8] {
        &self.bytes[self.data.clone()]
    }

    /// byte range of the sample data within the whole file
    pub fn sample_range(&self) -> Range<usize> {
        self.data.clone()
    }

    /// number of bits that can be hidden, one per sample byte
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// the longest message in bytes that still fits into this carrier
    pub fn message_capacity(&self) -> usize {
        (self.capacity() / 8).saturating_sub(encoded_size(0))
    }

    /// Returns a new media with the framed stream hidden in its sample data
    pub fn hide_data(&self, framed: &[u8]) -> Result<Self> {
        let stego = LsbCodec::embed(self.samples(), framed)?;

        let mut bytes = self.bytes.clone();
        bytes[self.data.clone()].copy_from_slice(&stego);

        Ok(Self {
            bytes,
            data: self.data.clone(),
            spec: self.spec,
        })
    }

    /// Reads the framed stream back out of the sample data
    pub fn unveil_data(&self) -> Result<Vec<u8>> {
        LsbCodec::extract(self.samples())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Persist for WavMedia {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;

        f.write_all(&self.bytes).map_err(|e| {
            error!("Error writing audio to {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })
    }
}

/// Walks the RIFF chunk list up to the `data` chunk.
///
/// A `data` chunk that announces more bytes than the file holds is cut to what is there.
fn locate_sample_data(bytes: &[u8]) -> Result<Range<usize>> {
    if bytes.len() < RIFF_HEADER_LEN || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(SteganoError::InvalidAudioMedia);
    }

    let mut offset = RIFF_HEADER_LEN;
    while offset + CHUNK_HEADER_LEN <= bytes.len() {
        let id = &bytes[offset..offset + 4];
        let size = LittleEndian::read_u32(&bytes[offset + 4..offset + CHUNK_HEADER_LEN]) as usize;
        let body = offset + CHUNK_HEADER_LEN;

        if id == b"data" {
            let end = body.saturating_add(size).min(bytes.len());
            return Ok(body..end);
        }

        // chunks are padded to an even size
        offset = body.saturating_add(size).saturating_add(size & 1);
    }

    Err(SteganoError::MissingDataChunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::payload::frame;
    use crate::test_utils::carrier_bytes as carrier;
    use hound::WavWriter;
    use tempfile::TempDir;

    /// RIFF/WAVE with a fmt chunk and an additional LIST chunk before data
    fn carrier_with_extra_chunk(list: &[u8]) -> Vec<u8> {
        let mut fmt = Vec::new();
        fmt.extend_from_slice(&1u16.to_le_bytes()); // PCM
        fmt.extend_from_slice(&1u16.to_le_bytes()); // mono
        fmt.extend_from_slice(&8000u32.to_le_bytes());
        fmt.extend_from_slice(&16000u32.to_le_bytes());
        fmt.extend_from_slice(&2u16.to_le_bytes());
        fmt.extend_from_slice(&16u16.to_le_bytes());

        let mut body = b"WAVE".to_vec();
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
        body.extend_from_slice(&fmt);
        body.extend_from_slice(b"LIST");
        body.extend_from_slice(&(list.len() as u32).to_le_bytes());
        body.extend_from_slice(list);
        if list.len() % 2 == 1 {
            body.push(0);
        }
        body.extend_from_slice(b"data");
        body.extend_from_slice(&8u32.to_le_bytes());
        body.extend_from_slice(&[0x10; 8]);

        let mut wav = b"RIFF".to_vec();
        wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
        wav.extend_from_slice(&body);

        wav
    }

    #[test]
    fn should_find_the_sample_data_of_a_canonical_wav() {
        let media = WavMedia::from_bytes(carrier(100)).unwrap();

        assert_eq!(media.sample_range(), 44..244);
        assert_eq!(media.capacity(), 200);
        assert_eq!(media.spec().bits_per_sample, 16);
    }

    #[test]
    fn should_skip_unknown_chunks() {
        let media = WavMedia::from_bytes(carrier_with_extra_chunk(&[1, 2, 3, 4])).unwrap();

        assert_eq!(media.samples(), &[0x10; 8]);
    }

    #[test]
    fn should_honor_the_padding_of_odd_sized_chunks() {
        let wav = carrier_with_extra_chunk(&[1, 2, 3]);
        let range = locate_sample_data(&wav).unwrap();

        assert_eq!(range, wav.len() - 8..wav.len());
        assert_eq!(&wav[range], &[0x10; 8]);
    }

    #[test]
    fn should_cut_a_data_chunk_that_claims_too_much() {
        let mut wav = carrier(10);
        wav.truncate(wav.len() - 6);

        let media = WavMedia::from_bytes(wav).unwrap();
        assert_eq!(media.capacity(), 14);
    }

    #[test]
    fn should_reject_non_riff_data() {
        assert!(matches!(
            WavMedia::from_bytes(b"definitely not a wav file".to_vec()),
            Err(SteganoError::InvalidAudioMedia)
        ));
        assert!(matches!(
            WavMedia::from_bytes(Vec::new()),
            Err(SteganoError::InvalidAudioMedia)
        ));
    }

    #[test]
    fn should_report_a_missing_data_chunk() {
        let wav = carrier(4);
        // keep RIFF header and fmt chunk only
        let without_data = wav[..36].to_vec();

        assert!(matches!(
            WavMedia::from_bytes(without_data),
            Err(SteganoError::MissingDataChunk)
        ));
    }

    #[test]
    fn should_reject_float_samples() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut buffer, spec).unwrap();
            writer.write_sample(0.5f32).unwrap();
            writer.finalize().unwrap();
        }

        assert!(matches!(
            WavMedia::from_bytes(buffer.into_inner()),
            Err(SteganoError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_only_change_sample_bytes() {
        let original = carrier(1000);
        let media = WavMedia::from_bytes(original.clone()).unwrap();
        let framed = frame(&[0xff; 96]).unwrap();
        let secret = media.hide_data(&framed).unwrap();
        let bytes = secret.as_bytes();

        assert_eq!(bytes.len(), original.len());
        assert_eq!(&bytes[..44], &original[..44], "header was modified");
        assert_ne!(&bytes[44..], &original[44..]);
        assert_eq!(secret.unveil_data().unwrap(), framed);
    }

    #[test]
    fn should_know_the_message_capacity() {
        // 2000 sample bytes hold 250 framed bytes, 64 of them are overhead
        let media = WavMedia::from_bytes(carrier(1000)).unwrap();
        assert_eq!(media.message_capacity(), 186);

        let tiny = WavMedia::from_bytes(carrier(10)).unwrap();
        assert_eq!(tiny.message_capacity(), 0);
    }

    #[test]
    fn should_only_open_wav_files() -> Result<()> {
        let out_dir = TempDir::new()?;
        let wav = out_dir.path().join("carrier.WAV");
        std::fs::write(&wav, carrier(16))?;
        let png = out_dir.path().join("carrier.png");
        std::fs::write(&png, carrier(16))?;

        assert_eq!(WavMedia::from_file(&wav)?.capacity(), 32);
        assert!(matches!(
            WavMedia::from_file(&png),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            WavMedia::from_file(&out_dir.path().join("missing.wav")),
            Err(SteganoError::ReadError { .. })
        ));

        Ok(())
    }

    #[test]
    fn should_save_the_exact_bytes() -> Result<()> {
        let out_dir = TempDir::new()?;
        let target = out_dir.path().join("copy.wav");
        let mut media = WavMedia::from_bytes(carrier(16))?;

        media.save_as(&target)?;

        assert_eq!(std::fs::read(&target)?, media.as_bytes());
        Ok(())
    }
}
