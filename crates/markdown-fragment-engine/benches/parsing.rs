use criterion::{Criterion, criterion_group, criterion_main};
use markdown_fragment_engine::{Options, convert_markdown_to_html, format_inline};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("convert_markdown_to_html", |b| {
        b.iter(|| {
            let out = convert_markdown_to_html(std::hint::black_box(&content));
            std::hint::black_box(out);
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let line = common::generate_inline_heavy_line(50);
    group.bench_function("format_inline", |b| {
        b.iter(|| {
            let out = format_inline(std::hint::black_box(&line), Options::ALL);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_inline);
criterion_main!(benches);
