use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use alloy_language_server::format_document;

fn generate_unformatted_content(blocks: usize) -> String {
    let patterns = [
        "prometheus.remote_write \"default\" {",
        "endpoint {",
        "url = \"http://mimir:9009/api/v1/push\"",
        "      // credentials come from the environment",
        "basic_auth {",
        "username = env(\"MIMIR_USER\")",
        "}",
        "}",
        "}",
        "",
    ];

    let mut content = String::new();
    for _ in 0..blocks {
        for line in patterns {
            content.push_str(line);
            content.push('\n');
        }
    }

    content
}

fn bench_format_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_document");

    for blocks in [100, 1_000, 10_000].iter() {
        let content = generate_unformatted_content(*blocks);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("blocks", blocks), &content, |b, content| {
            b.iter(|| black_box(format_document(black_box(content))))
        });
    }

    group.finish();
}

fn bench_format_already_formatted(c: &mut Criterion) {
    let content = format_document(&generate_unformatted_content(1_000));

    c.bench_function("format_already_formatted", |b| {
        b.iter(|| black_box(format_document(black_box(&content))))
    });
}

criterion_group!(benches, bench_format_document, bench_format_already_formatted);
criterion_main!(benches);
