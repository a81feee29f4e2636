//! Lexer benchmarks.
//!
//! Run with `cargo bench --package wispc-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wispc_lex::lex;
use wispc_util::Handler;

fn token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    lex(source.as_bytes(), &mut handler).unwrap().lcode.len()
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "x = 42\ny = x + 1\nfunction f(a, b)\n  return a + b\nend\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_function", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_strings_and_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    let source = "\"hello \\u00E9 world\" + 0xFF + 1.5e10 + .25\n".repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("literal_heavy", |b| b.iter(|| token_count(black_box(&source))));

    group.finish();
}

criterion_group!(benches, bench_lexer_identifiers, bench_lexer_strings_and_numbers);
criterion_main!(benches);
