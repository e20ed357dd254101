use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stegwav_core::media::audio::LsbCodec;
use stegwav_core::media::payload::frame;

pub fn audio_decoding(c: &mut Criterion) {
    let carrier: Vec<u8> = (0..1_764_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let mut group = c.benchmark_group("Audio Decoding");

    for message_len in [64usize, 4 * 1024, 64 * 1024] {
        let framed = frame(&vec![0xa5; message_len]).expect("Cannot frame payload");
        let stego = LsbCodec::embed(&carrier, &framed).expect("Cannot embed payload");
        group.throughput(Throughput::Bytes(framed.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(message_len),
            &stego,
            |b, stego| {
                b.iter(|| LsbCodec::extract(stego).expect("Cannot extract payload"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
