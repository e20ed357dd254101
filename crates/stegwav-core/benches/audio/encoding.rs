use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stegwav_core::media::audio::LsbCodec;
use stegwav_core::media::payload::frame;

pub fn audio_encoding(c: &mut Criterion) {
    // ten seconds of 16 bit stereo at 44.1 kHz
    let carrier: Vec<u8> = (0..1_764_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let mut group = c.benchmark_group("Audio Encoding to memory");

    for message_len in [64usize, 4 * 1024, 64 * 1024] {
        let framed = frame(&vec![0x5a; message_len]).expect("Cannot frame payload");
        group.throughput(Throughput::Bytes(framed.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(message_len),
            &framed,
            |b, framed| {
                b.iter(|| LsbCodec::embed(&carrier, framed).expect("Cannot embed payload"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
