use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use huffman_bitstring::{try_decode, try_encode};

fn bench_codec(c: &mut Criterion) {
    let prose = "The bird is the word. Everybody's heard about the bird. ".repeat(200);

    let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
    let alphabet: Vec<char> = (' '..='~').collect();
    let noise: String = (0..10_000)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    c.bench_function("encode_prose", |b| b.iter(|| try_encode(black_box(&prose))));
    c.bench_function("encode_noise", |b| b.iter(|| try_encode(black_box(&noise))));

    let (tree, bits) = match try_encode(&prose) {
        Ok(res) => res,
        Err(e) => panic!("benchmark input must encode: {}", e),
    };
    c.bench_function("decode_prose", |b| {
        b.iter(|| try_decode(black_box(&tree), black_box(&bits)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
