use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

/// canonical 44 byte header written by hound
pub const HEADER_LEN: usize = 44;

pub fn wav_with_samples<I>(bits_per_sample: u16, channels: u16, samples: I) -> Vec<u8>
where
    I: IntoIterator<Item = i32>,
{
    let spec = WavSpec {
        channels,
        sample_rate: 44_100,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    };
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut buffer, spec).expect("Cannot create writer");
        for sample in samples {
            writer.write_sample(sample).expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize");
    }

    buffer.into_inner()
}

/// 16 bit mono carrier with exactly `sample_bytes` bytes of sample data
pub fn carrier(sample_bytes: usize) -> Vec<u8> {
    assert_eq!(sample_bytes % 2, 0, "16 bit samples come in pairs of bytes");
    wav_with_samples(16, 1, noise(sample_bytes / 2, 0x5eed).map(|s| s >> 16))
}

pub fn silence(sample_bytes: usize) -> Vec<u8> {
    wav_with_samples(16, 1, std::iter::repeat(0).take(sample_bytes / 2))
}

/// xorshift noise, deterministic per seed
pub fn noise(count: usize, seed: u32) -> impl Iterator<Item = i32> {
    let mut state = seed;
    (0..count).map(move |_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as i32
    })
}
