use bigmult::BigInt;

fn long_decimal(len: usize) -> String {
    // A repeating pattern is enough to exercise every word of the parser.
    "31415926535897932384626433832795"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn test_parse(digits: &str) {
    black_box(BigInt::from_decimal(digits).unwrap());
}

fn test_mul() {
    let a = BigInt::pseudorandom(500, 12345);
    let b = BigInt::pseudorandom(500, 67890);
    black_box(a.try_mul(&b).unwrap());
}

fn test_mul_unbalanced() {
    let a = BigInt::pseudorandom(2000, 12345);
    let b = BigInt::pseudorandom(3, 67890);
    black_box(a.try_mul(&b).unwrap());
}

fn test_as_hex(num: &BigInt) {
    black_box(num.as_hex());
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let digits = long_decimal(5000);
    let num = BigInt::pseudorandom(1000, 1);
    c.bench_function("test_parse", |b| b.iter(|| test_parse(&digits)));
    c.bench_function("test_mul", |b| b.iter(test_mul));
    c.bench_function("test_mul_unbalanced", |b| b.iter(test_mul_unbalanced));
    c.bench_function("test_as_hex", |b| b.iter(|| test_as_hex(&num)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
